/// Edge weight type (distance in meters)
pub type Weight = u64;
/// Total weight of a path. Wide enough that no sum of edge weights overflows
pub type Distance = u128;
/// Weight as supplied by the caller, before validation
pub type RawWeight = i64;
/// Human readable name of a location on the map
pub type NodeName = String;
