mod settings;
mod tick_timer;

pub use settings::Settings;
pub use tick_timer::TickTimer;
