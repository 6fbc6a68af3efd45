//! Test consumer crate that compiles bindings generated by build.rs.

pub mod client {
    include!(concat!(env!("OUT_DIR"), "/client.rs"));
}

pub mod server {
    include!(concat!(env!("OUT_DIR"), "/server.rs"));
}
