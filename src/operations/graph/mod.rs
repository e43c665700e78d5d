mod add_wall;
mod adjacency;
mod delete_node;
mod nearby_node;

pub use add_wall::AddWall;
pub use adjacency::Adjacency;
pub use delete_node::DeleteNode;
pub use nearby_node::FindNearbyNode;
