use ncollide2d::na::Point2;
use serde::ser::SerializeSeq;
use serde::{Serialize, Serializer};

#[derive(Serialize)]
#[serde(remote = "Point2<f64>")]
pub struct Point2f64 {
    x: f64,
    y: f64,
}

#[derive(Serialize)]
struct PointValue(#[serde(with = "Point2f64")] Point2<f64>);

/// Serializes a sequence of points as a list of `{"x": .., "y": ..}` objects, for use with
/// `#[serde(serialize_with = "points")]`
pub fn points<S: Serializer>(v: &[Point2<f64>], serializer: S) -> Result<S::Ok, S::Error> {
    let mut seq = serializer.serialize_seq(Some(v.len()))?;
    for p in v.iter() {
        seq.serialize_element(&PointValue(*p))?;
    }
    seq.end()
}
