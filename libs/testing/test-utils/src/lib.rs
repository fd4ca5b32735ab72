//! Shared test utilities for the laptop catalog
//!
//! - `TestDataBuilder`: deterministic sample laptops, filters, scores and image bytes
//! - `assertions`: small assertion helpers
//!
//! # Usage
//!
//! ```
//! use test_utils::TestDataBuilder;
//!
//! let mut builder = TestDataBuilder::from_test_name("test_search_laptop");
//! let laptop = builder.laptop();
//! assert!(laptop.id.is_empty());
//! ```

use chrono::{DateTime, TimeZone, Utc};
use domain_laptops::{
    Cpu, Filter, Gpu, Keyboard, KeyboardLayout, Laptop, Memory, MemoryUnit, Panel, Resolution,
    Screen, Storage, StorageDriver, Weight,
};
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::{Rng, SeedableRng};
use uuid::Uuid;

const BRANDS: [(&str, [&str; 3]); 3] = [
    ("Apple", ["Macbook Air", "Macbook Pro", "Macbook Pro 16"]),
    ("Dell", ["Latitude", "Vostro", "XPS"]),
    ("Lenovo", ["Thinkpad X1", "Thinkpad P1", "Thinkpad P53"]),
];

const INTEL_CPUS: [&str; 4] = ["Xeon E-2286M", "Core i9-9980HK", "Core i7-9750H", "Core i5-9400F"];
const AMD_CPUS: [&str; 3] = ["Ryzen 7 PRO 2700U", "Ryzen 5 PRO 3500U", "Ryzen 3 PRO 3200GE"];
const NVIDIA_GPUS: [&str; 3] = ["RTX 2060", "RTX 2070", "GTX 1660-Ti"];
const AMD_GPUS: [&str; 2] = ["RX 590", "RX Vega-56"];

/// Builder for test data with deterministic randomization
///
/// The same seed always yields the same sequence of values.
pub struct TestDataBuilder {
    rng: StdRng,
}

impl TestDataBuilder {
    /// Create a new builder with a seed (for deterministic tests)
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Create from test name (generates seed from test name hash)
    pub fn from_test_name(name: &str) -> Self {
        use std::collections::hash_map::DefaultHasher;
        use std::hash::{Hash, Hasher};

        let mut hasher = DefaultHasher::new();
        name.hash(&mut hasher);
        Self::new(hasher.finish())
    }

    /// A syntactically valid laptop id.
    pub fn laptop_id(&mut self) -> String {
        Uuid::from_bytes(self.rng.random()).to_string()
    }

    /// A fully populated laptop with an empty id.
    pub fn laptop(&mut self) -> Laptop {
        let (brand, names) = *BRANDS.choose(&mut self.rng).unwrap_or(&BRANDS[0]);
        let name = names.choose(&mut self.rng).copied().unwrap_or(names[0]);
        let gpu_count = self.rng.random_range(1..=2);
        let storages = if self.rng.random_bool(0.5) {
            vec![self.ssd(), self.hdd()]
        } else {
            vec![self.ssd()]
        };

        Laptop {
            id: String::new(),
            brand: brand.to_string(),
            name: name.to_string(),
            cpu: self.cpu(),
            ram: Memory::gigabytes(self.rng.random_range(4..=64)),
            gpus: (0..gpu_count).map(|_| self.gpu()).collect(),
            storages,
            screen: Some(self.screen()),
            keyboard: Some(self.keyboard()),
            weight: Some(Weight::Kilograms(round2(self.rng.random_range(1.0..3.0)))),
            price_usd: round2(self.rng.random_range(1500.0..3500.0)),
            release_year: self.rng.random_range(2015..=2024),
            updated_at: Some(self.timestamp()),
        }
    }

    /// A laptop that satisfies `filter`.
    pub fn laptop_matching(&mut self, filter: &Filter) -> Laptop {
        let mut laptop = self.laptop();
        if filter.max_price_usd > 0.0 {
            laptop.price_usd = filter.max_price_usd;
        }
        laptop.cpu.number_cores = laptop.cpu.number_cores.max(filter.min_cpu_cores);
        laptop.cpu.min_ghz = laptop.cpu.min_ghz.max(filter.min_cpu_ghz);
        if laptop.ram.to_bits() < filter.min_ram.to_bits() {
            laptop.ram = filter.min_ram;
        }
        laptop
    }

    /// A score in `1.0..=10.0`.
    pub fn score(&mut self) -> f64 {
        f64::from(self.rng.random_range(1..=10u8))
    }

    /// `size` bytes of pseudo-random image data.
    pub fn image_bytes(&mut self, size: usize) -> Vec<u8> {
        let mut bytes = vec![0u8; size];
        self.rng.fill(bytes.as_mut_slice());
        bytes
    }

    fn cpu(&mut self) -> Cpu {
        let intel = self.rng.random_bool(0.5);
        let (brand, name) = if intel {
            ("Intel", INTEL_CPUS.choose(&mut self.rng).copied().unwrap_or(INTEL_CPUS[0]))
        } else {
            ("AMD", AMD_CPUS.choose(&mut self.rng).copied().unwrap_or(AMD_CPUS[0]))
        };
        let number_cores = self.rng.random_range(2..=8);
        let number_threads = self.rng.random_range(number_cores..=12);
        let min_ghz = round2(self.rng.random_range(2.0..3.5));
        let max_ghz = round2(self.rng.random_range(min_ghz..5.0));

        Cpu {
            brand: brand.to_string(),
            name: name.to_string(),
            number_cores,
            number_threads,
            min_ghz,
            max_ghz,
        }
    }

    fn gpu(&mut self) -> Gpu {
        let (brand, name) = if self.rng.random_bool(0.5) {
            ("NVIDIA", NVIDIA_GPUS.choose(&mut self.rng).copied().unwrap_or(NVIDIA_GPUS[0]))
        } else {
            ("AMD", AMD_GPUS.choose(&mut self.rng).copied().unwrap_or(AMD_GPUS[0]))
        };
        let min_ghz = round2(self.rng.random_range(1.0..1.5));
        let max_ghz = round2(self.rng.random_range(min_ghz..2.0));

        Gpu {
            brand: brand.to_string(),
            name: name.to_string(),
            min_ghz,
            max_ghz,
            memory: Memory::gigabytes(self.rng.random_range(2..=6)),
        }
    }

    fn ssd(&mut self) -> Storage {
        Storage {
            driver: StorageDriver::Ssd,
            memory: Memory::gigabytes(self.rng.random_range(128..=1024)),
        }
    }

    fn hdd(&mut self) -> Storage {
        Storage {
            driver: StorageDriver::Hdd,
            memory: Memory::new(self.rng.random_range(1..=6), MemoryUnit::Terabyte),
        }
    }

    fn screen(&mut self) -> Screen {
        let height = self.rng.random_range(1080..=4320);
        Screen {
            size_inch: self.rng.random_range(13.0f32..17.0),
            resolution: Resolution {
                width: height * 16 / 9,
                height,
            },
            panel: if self.rng.random_bool(0.5) {
                Panel::Ips
            } else {
                Panel::Oled
            },
            multitouch: self.rng.random_bool(0.5),
        }
    }

    fn keyboard(&mut self) -> Keyboard {
        let layout = [
            KeyboardLayout::Qwerty,
            KeyboardLayout::Qwertz,
            KeyboardLayout::Azerty,
        ]
        .choose(&mut self.rng)
        .copied()
        .unwrap_or(KeyboardLayout::Qwerty);

        Keyboard {
            layout,
            backlit: self.rng.random_bool(0.5),
        }
    }

    fn timestamp(&mut self) -> DateTime<Utc> {
        let seconds = self.rng.random_range(1_600_000_000..1_700_000_000);
        Utc.timestamp_opt(seconds, 0).single().unwrap_or_default()
    }

}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Test assertion helpers
pub mod assertions {
    use domain_laptops::Laptop;

    /// Assert that two laptops are equal apart from their ids
    pub fn assert_same_laptop(actual: &Laptop, expected: &Laptop, context: &str) {
        let actual = Laptop {
            id: String::new(),
            ..actual.clone()
        };
        let expected = Laptop {
            id: String::new(),
            ..expected.clone()
        };
        assert_eq!(actual, expected, "{}: laptops differ", context);
    }

    /// Assert that an optional value is Some
    pub fn assert_some<T>(value: Option<T>, context: &str) -> T {
        value.unwrap_or_else(|| panic!("{}: expected Some, got None", context))
    }
}
