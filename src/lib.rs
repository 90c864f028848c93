#![deny(clippy::all)]

mod finger;
mod profile;
mod range;

pub use finger::Finger;
pub use profile::{
    CalibrationProfile, DegenerateRange, RangeTable, COMMON_CURL_RANGE, FINGER_SPLAY_RANGE,
    THUMB_CURL_RANGE,
};
pub use range::MotionRange;

/// Sets up logging for a host process that doesn't bring its own logger.
/// Subsequent calls are no-ops.
pub fn init_logging() {
    static ONCE: std::sync::Once = std::sync::Once::new();

    ONCE.call_once(|| {
        env_logger::Builder::new()
            .filter_level(log::LevelFilter::Info)
            .parse_default_env()
            .is_test(cfg!(test))
            .format(|buf, record| {
                use std::io::Write;
                use time::macros::format_description;

                let style = buf.default_level_style(record.level());
                let now = time::OffsetDateTime::now_local()
                    .unwrap_or_else(|_| time::OffsetDateTime::now_utc());
                let now = now
                    .format(format_description!(
                        "[year]-[month]-[day]T[hour]:[minute]:[second].[subsecond digits:3]"
                    ))
                    .unwrap();

                write!(buf, "[{now} {style}{:5}{style:#}", record.level())?;
                if let Some(path) = record.module_path() {
                    write!(buf, " {}", path)?;
                }
                writeln!(buf, " {:?}] {}", std::thread::current().id(), record.args())
            })
            .init();

        log::info!("Initializing handcal");
    });
}
