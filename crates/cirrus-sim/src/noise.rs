//! Stream chaos - seeded corruption of the scripted stream
//!
//! Serial links split reads at arbitrary byte counts, interleave debug
//! garbage, and occasionally mangle a frame mid-flight. The chaos model is
//! fully seeded so every failure reproduces.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Chaos parameters for one simulated stream
#[derive(Debug, Clone, Copy)]
pub struct ChaosConfig {
    /// Chance a line gets junk injected before it
    pub junk_probability: f64,
    /// Chance a line gets a character range mangled
    pub mangle_probability: f64,
    /// Chance a line is split into two chunks mid-frame
    pub split_probability: f64,
}

impl ChaosConfig {
    /// Clean link: no corruption at all
    pub fn none() -> Self {
        ChaosConfig {
            junk_probability: 0.0,
            mangle_probability: 0.0,
            split_probability: 0.0,
        }
    }

    /// Typical noisy serial link
    pub fn light() -> Self {
        ChaosConfig {
            junk_probability: 0.10,
            mangle_probability: 0.02,
            split_probability: 0.25,
        }
    }

    /// Torture settings
    pub fn heavy() -> Self {
        ChaosConfig {
            junk_probability: 0.40,
            mangle_probability: 0.20,
            split_probability: 0.60,
        }
    }
}

/// Applies seeded chaos to a sequence of stream lines
pub struct StreamChaos {
    config: ChaosConfig,
    rng: StdRng,
}

impl StreamChaos {
    pub fn new(config: ChaosConfig, seed: u64) -> Self {
        StreamChaos {
            config,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Turn clean lines into the chunk sequence a reader would observe
    pub fn chunks(&mut self, lines: &[String]) -> Vec<String> {
        let mut chunks = Vec::new();

        for line in lines {
            if self.rng.gen_bool(self.config.junk_probability) {
                chunks.push(self.junk_line());
            }

            let line = if self.rng.gen_bool(self.config.mangle_probability) {
                self.mangle(line)
            } else {
                line.clone()
            };

            if self.rng.gen_bool(self.config.split_probability) && line.len() > 2 {
                let cut = self.char_boundary(&line);
                chunks.push(line[..cut].to_string());
                chunks.push(line[cut..].to_string());
            } else {
                chunks.push(line);
            }
        }

        chunks
    }

    fn junk_line(&mut self) -> String {
        const JUNK: &[&str] = &[
            "dbg: loop 12ms\n",
            "\u{0}\u{0}>>>\n",
            "VISUAL incomplete\n",
            "tempo=92 swing=0.6\n",
        ];
        JUNK[self.rng.gen_range(0..JUNK.len())].to_string()
    }

    /// Overwrite a short range of the line with garbage characters
    fn mangle(&mut self, line: &str) -> String {
        let mut chars: Vec<char> = line.chars().collect();
        if chars.len() < 4 {
            return line.to_string();
        }
        let start = self.rng.gen_range(0..chars.len() - 2);
        let len = self.rng.gen_range(1..=2);
        for slot in chars.iter_mut().skip(start).take(len) {
            *slot = '#';
        }
        chars.into_iter().collect()
    }

    fn char_boundary(&mut self, line: &str) -> usize {
        let mut cut = self.rng.gen_range(1..line.len());
        while !line.is_char_boundary(cut) {
            cut += 1;
        }
        cut
    }
}
