//! Outbound log sink seam.

use timehub_entity::TimeLog;

/// Destination for completed session records. Decouples the lifecycle
/// engine from the webhook transport.
///
/// Delivery is strictly fire-and-forget: implementations must return
/// immediately (spawning any I/O) and must swallow their own failures.
/// The lifecycle transition that produced the log has already committed
/// by the time `deliver` is called and is never rolled back.
pub trait LogSink: Send + Sync + std::fmt::Debug {
    /// Hand off one completed session record for delivery.
    fn deliver(&self, log: TimeLog);
}
