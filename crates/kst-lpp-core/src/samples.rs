//! Reference uplinks captured from KST3320 sensors.

/// A labeled sample payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sample {
    pub label: &'static str,
    pub payload: &'static str,
    pub note: Option<&'static str>,
}

pub const SAMPLES: [Sample; 5] = [
    Sample {
        label: "DISTANCE",
        payload: "01820036",
        note: None,
    },
    Sample {
        label: "BATTERY",
        payload: "017863",
        note: None,
    },
    Sample {
        label: "ACCELEROMETER",
        payload: "01710000FFFD03EB",
        note: Some("Only supported in firmware version 0.6.18"),
    },
    Sample {
        label: "STANDARD GPS",
        payload: "018805F371F006170372EE",
        note: None,
    },
    Sample {
        label: "EXTENDED GPS",
        payload: "018805F371F006170372EE00018D800000FA3604",
        note: None,
    },
];

#[cfg(test)]
mod tests {
    use super::SAMPLES;
    use crate::decode;

    #[test]
    fn every_sample_decodes() {
        for sample in SAMPLES {
            assert!(decode(sample.payload).is_ok(), "{}", sample.label);
        }
    }
}
