// Routing module entry
// Explicit route table built once at startup

mod table;

pub use table::{PathPattern, RouteEntry, RouteMatch, RouteTable, RouteTarget};
