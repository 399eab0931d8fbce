//! Clock helpers for the taskbar time display.

#[cfg(not(target_arch = "wasm32"))]
use std::time::{SystemTime, UNIX_EPOCH};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Wall-clock time of day.
pub struct ClockTime {
    /// Hour in `0..24`.
    pub hour: u32,
    /// Minute in `0..60`.
    pub minute: u32,
}

/// Returns the current local time of day.
///
/// Native targets have no timezone source and report UTC.
pub fn local_clock_now() -> ClockTime {
    #[cfg(target_arch = "wasm32")]
    {
        let date = js_sys::Date::new_0();
        ClockTime {
            hour: date.get_hours(),
            minute: date.get_minutes(),
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        let secs = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_secs();
        let of_day = secs % 86_400;
        ClockTime {
            hour: (of_day / 3_600) as u32,
            minute: ((of_day % 3_600) / 60) as u32,
        }
    }
}

/// Formats a clock reading as zero-padded `HH:MM`.
pub fn format_clock_hh_mm(time: ClockTime) -> String {
    format!("{:02}:{:02}", time.hour, time.minute)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clock_pads_single_digits() {
        assert_eq!(format_clock_hh_mm(ClockTime { hour: 7, minute: 5 }), "07:05");
        assert_eq!(
            format_clock_hh_mm(ClockTime {
                hour: 23,
                minute: 59
            }),
            "23:59"
        );
    }

    #[test]
    fn native_clock_stays_in_range() {
        let now = local_clock_now();
        assert!(now.hour < 24);
        assert!(now.minute < 60);
    }
}
