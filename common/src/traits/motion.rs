use uuid::Uuid;

use crate::traits::Notifiable;
use crate::types::timed::MotionSample;

/// Device motion feed delivering one [`MotionSample`] per sensor tick.
pub trait MotionSource: Send + Sync {
    ///  Returns the tag identifying the device.
    fn get_tag(&self) -> &str;
    /// Returns false when the device has no usable motion hardware.
    fn is_available(&self) -> bool;
    /// Registers a listener that receives every new sample. Returns the listener id.
    fn register_listener(&self, listener: &mut dyn Notifiable<MotionSample>) -> Uuid;
    /// Removes a listener. Returns an error if the id is unknown.
    fn unregister_listener(&self, id: Uuid) -> Result<(), String>;
}
