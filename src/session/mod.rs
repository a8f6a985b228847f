pub mod attribute_fields;
pub mod state;
pub mod store;

pub use attribute_fields::{
    AttributeFields, DEFAULT_FIELD_COUNT, DEFAULT_MAX_FIELD_COUNT, field_label,
};
pub use state::{DEFAULT_PREFIX, SessionDefaults, SessionState};
pub use store::{DEFAULT_MAX_SESSIONS, SessionStore};
