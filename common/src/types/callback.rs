use std::sync::Arc;
use uuid::Uuid;

/// Function invoked by a publisher with the id of the listener it was registered under.
pub type Callback<T> = Arc<dyn Fn(Uuid, Arc<T>) + Send + Sync>;
