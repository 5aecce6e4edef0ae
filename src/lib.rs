//! Thirteen Water (十三水) core: lane evaluation and comparison, foul
//! detection, special-hand bonuses, exhaustive arrangement search, and
//! zero-sum table settlement.
//!
//! Everything here is a pure, synchronous function over `Copy` value
//! types; dealing, seats, transport, and persistence belong to callers.

pub mod cards;
pub mod gameplay;

/// Signed scoring unit (水). Lane wins, special bonuses, and settlements
/// are all denominated in water.
pub type Water = i16;

/// Seat index around the table.
pub type Seat = usize;

/// Random instance generation for testing and simulation.
pub trait Arbitrary {
    /// Generate a uniformly random instance.
    fn random() -> Self;
}

/// Initialize dual logging (terminal + file) with timestamped log files.
/// Creates `logs/` and writes DEBUG level to file, INFO to terminal.
#[cfg(feature = "cli")]
pub fn log() {
    std::fs::create_dir_all("logs").expect("create logs directory");
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    let time = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .expect("time moves slow")
        .as_secs();
    let file = simplelog::WriteLogger::new(
        log::LevelFilter::Debug,
        config.clone(),
        std::fs::File::create(format!("logs/{}.log", time)).expect("create log file"),
    );
    let term = simplelog::TermLogger::new(
        log::LevelFilter::Info,
        config,
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    );
    simplelog::CombinedLogger::init(vec![term, file]).expect("initialize logger");
}
