pub mod gossip {
    pub use super::super::generated::gossip::*;
}

pub mod persistent {
    pub use super::super::generated::persistent::*;
}

pub mod streams {
    pub use super::super::generated::streams::*;
}
