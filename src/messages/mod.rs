use tokio::sync::oneshot;

use crate::domain::{NewUser, User};
use crate::error::UserError;
use crate::registry::RegistryStats;

/// Generic type aliases for service communication
pub type ServiceResult<T, E> = std::result::Result<T, E>;
pub type ServiceResponse<T, E> = oneshot::Sender<ServiceResult<T, E>>;

/// Requests understood by [`RegistryService`](crate::service::RegistryService).
/// One variant per registry operation, each carrying its arguments and a
/// oneshot channel for the reply.
#[derive(Debug)]
pub enum RegistryRequest {
    Register {
        user: NewUser,
        respond_to: ServiceResponse<bool, UserError>,
    },
    Authenticate {
        email: String,
        password: String,
        respond_to: ServiceResponse<Option<User>, UserError>,
    },
    Delete {
        email: String,
        respond_to: ServiceResponse<bool, UserError>,
    },
    Find {
        email: String,
        respond_to: ServiceResponse<Option<User>, UserError>,
    },
    ListAll {
        respond_to: ServiceResponse<Vec<User>, UserError>,
    },
    UpdateName {
        email: String,
        new_name: String,
        respond_to: ServiceResponse<bool, UserError>,
    },
    ChangePassword {
        email: String,
        current: String,
        new_password: String,
        respond_to: ServiceResponse<bool, UserError>,
    },
    Count {
        respond_to: ServiceResponse<usize, UserError>,
    },
    Exists {
        email: String,
        respond_to: ServiceResponse<bool, UserError>,
    },
    Clear {
        respond_to: ServiceResponse<(), UserError>,
    },
    Stats {
        respond_to: ServiceResponse<RegistryStats, UserError>,
    },
    Shutdown,
}
