use std::time::Duration;

use crate::Credentials;

pub mod append_to_stream;
pub mod batch_append;
pub mod delete_stream;
pub mod persistent_subscription;
pub mod read_all;
pub mod read_stream;
pub mod retry;
pub mod subscribe_to_all;
pub mod subscribe_to_stream;
pub mod tombstone_stream;

pub(crate) trait Options {
    fn common_operation_options(&self) -> &CommonOperationOptions;
    fn kind(&self) -> OperationKind;
}

#[derive(Clone, Default)]
pub(crate) struct CommonOperationOptions {
    pub(crate) credentials: Option<Credentials>,
    pub(crate) requires_leader: bool,
    pub(crate) deadline: Option<Duration>,
}

#[derive(Clone, Copy, PartialEq, Eq)]
pub(crate) enum OperationKind {
    Regular,
    Streaming,
}

/// Wires an option record into the request envelope: exposes its common
/// operation options and adds the per-call credential, leader-affinity and
/// deadline setters.
#[macro_export]
macro_rules! impl_options_trait {
    ($t:ty) => {
        $crate::impl_options_trait!($t, $crate::options::OperationKind::Regular);
    };

    ($t:ty, $kind:expr) => {
        impl $crate::options::Options for $t {
            fn common_operation_options(&self) -> &$crate::options::CommonOperationOptions {
                &self.common_operation_options
            }

            fn kind(&self) -> $crate::options::OperationKind {
                $kind
            }
        }

        impl $t {
            /// Performs the command with the given credentials.
            pub fn authenticated(mut self, credentials: $crate::Credentials) -> Self {
                self.common_operation_options.credentials = Some(credentials);
                self
            }

            /// Requires the command to be performed against a leader node.
            pub fn requires_leader(mut self, requires_leader: bool) -> Self {
                self.common_operation_options.requires_leader = requires_leader;
                self
            }

            /// Overrides the deadline of the command.
            pub fn deadline(mut self, deadline: std::time::Duration) -> Self {
                self.common_operation_options.deadline = Some(deadline);
                self
            }
        }
    };
}
