//! Built-in gallery of sample texts.

use crate::font::BANNER_TEXT;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sample {
    pub name: &'static str,
    pub preset: &'static str,
    pub text: &'static str,
}

pub const SAMPLES: &[Sample] = &[
    Sample {
        name: "banner",
        preset: "pixel-block-header",
        text: BANNER_TEXT,
    },
    Sample {
        name: "hello",
        preset: "block",
        text: "HELLO WORLD",
    },
    Sample {
        name: "access",
        preset: "cyber",
        text: "ACCESS\nGRANTED",
    },
    Sample {
        name: "hack",
        preset: "outline",
        text: "HACK THE PLANET!",
    },
    Sample {
        name: "matrix",
        preset: "pixel-grid",
        text: "0101\n1010",
    },
    Sample {
        name: "terminal",
        preset: "minimal",
        text: "> ROOT@SHELL:~#",
    },
];

pub fn get_sample(name: &str) -> Option<&'static Sample> {
    SAMPLES.iter().find(|sample| sample.name.eq_ignore_ascii_case(name))
}
