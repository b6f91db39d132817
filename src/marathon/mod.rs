mod service_marathon;
pub use service_marathon::ServiceMarathon;

pub mod codec;
