use chrono::{DateTime, Utc};

/// Unit of a [`Memory`] quantity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum MemoryUnit {
    Bit,
    #[default]
    Byte,
    Kilobyte,
    Megabyte,
    Gigabyte,
    Terabyte,
}

impl MemoryUnit {
    /// Left shift that turns one unit into bits (binary prefixes).
    fn bit_shift(self) -> u32 {
        match self {
            MemoryUnit::Bit => 0,
            MemoryUnit::Byte => 3,
            MemoryUnit::Kilobyte => 13,
            MemoryUnit::Megabyte => 23,
            MemoryUnit::Gigabyte => 33,
            MemoryUnit::Terabyte => 43,
        }
    }
}

/// A memory or storage capacity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Memory {
    pub value: u64,
    pub unit: MemoryUnit,
}

impl Memory {
    pub fn new(value: u64, unit: MemoryUnit) -> Self {
        Self { value, unit }
    }

    pub fn gigabytes(value: u64) -> Self {
        Self::new(value, MemoryUnit::Gigabyte)
    }

    /// Capacity in bits, saturating at `u64::MAX`.
    pub fn to_bits(&self) -> u64 {
        let shift = self.unit.bit_shift();
        if self.value == 0 {
            return 0;
        }
        if self.value.leading_zeros() < shift {
            return u64::MAX;
        }
        self.value << shift
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Cpu {
    pub brand: String,
    pub name: String,
    pub number_cores: u32,
    pub number_threads: u32,
    pub min_ghz: f64,
    pub max_ghz: f64,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Gpu {
    pub brand: String,
    pub name: String,
    pub min_ghz: f64,
    pub max_ghz: f64,
    pub memory: Memory,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StorageDriver {
    Hdd,
    Ssd,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Storage {
    pub driver: StorageDriver,
    pub memory: Memory,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Resolution {
    pub width: u32,
    pub height: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Panel {
    Ips,
    Oled,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Screen {
    pub size_inch: f32,
    pub resolution: Resolution,
    pub panel: Panel,
    pub multitouch: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyboardLayout {
    Qwerty,
    Qwertz,
    Azerty,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Keyboard {
    pub layout: KeyboardLayout,
    pub backlit: bool,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Weight {
    Kilograms(f64),
    Pounds(f64),
}

/// Laptop entity - a catalog record
///
/// An empty `id` asks the store to assign one on save. Values handed out by the
/// store are owned copies.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Laptop {
    pub id: String,
    pub brand: String,
    pub name: String,
    pub cpu: Cpu,
    pub ram: Memory,
    pub gpus: Vec<Gpu>,
    pub storages: Vec<Storage>,
    pub screen: Option<Screen>,
    pub keyboard: Option<Keyboard>,
    pub weight: Option<Weight>,
    pub price_usd: f64,
    pub release_year: u32,
    pub updated_at: Option<DateTime<Utc>>,
}

/// Search criteria; a zero field imposes no constraint.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Filter {
    pub max_price_usd: f64,
    pub min_cpu_cores: u32,
    pub min_cpu_ghz: f64,
    pub min_ram: Memory,
}

impl Filter {
    /// Conjunction of every non-zero bound.
    pub fn matches(&self, laptop: &Laptop) -> bool {
        if self.max_price_usd > 0.0 && laptop.price_usd > self.max_price_usd {
            return false;
        }
        if self.min_cpu_cores > 0 && laptop.cpu.number_cores < self.min_cpu_cores {
            return false;
        }
        if self.min_cpu_ghz > 0.0 && laptop.cpu.min_ghz < self.min_cpu_ghz {
            return false;
        }
        let min_ram_bits = self.min_ram.to_bits();
        if min_ram_bits > 0 && laptop.ram.to_bits() < min_ram_bits {
            return false;
        }
        true
    }
}

/// Running rating aggregate for one laptop
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rating {
    pub count: u32,
    pub sum: f64,
}

impl Rating {
    pub fn average(&self) -> f64 {
        if self.count == 0 {
            return 0.0;
        }
        self.sum / f64::from(self.count)
    }
}

/// Metadata recorded for a stored image
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageRecord {
    pub id: String,
    pub laptop_id: String,
    pub image_type: String,
    pub location: String,
    pub size: usize,
}

/// Result of a completed upload
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredImage {
    pub id: String,
    pub size: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn laptop(price: f64, cores: u32, ghz: f64, ram: Memory) -> Laptop {
        Laptop {
            price_usd: price,
            cpu: Cpu {
                number_cores: cores,
                min_ghz: ghz,
                ..Default::default()
            },
            ram,
            ..Default::default()
        }
    }

    #[test]
    fn test_memory_to_bits() {
        assert_eq!(Memory::new(5, MemoryUnit::Bit).to_bits(), 5);
        assert_eq!(Memory::new(1, MemoryUnit::Byte).to_bits(), 8);
        assert_eq!(Memory::new(1, MemoryUnit::Kilobyte).to_bits(), 8 * 1024);
        assert_eq!(Memory::new(2, MemoryUnit::Megabyte).to_bits(), 2 * 8 * 1024 * 1024);
        assert_eq!(Memory::gigabytes(8).to_bits(), 8u64 << 33);
        assert_eq!(Memory::new(1, MemoryUnit::Terabyte).to_bits(), 1u64 << 43);
    }

    #[test]
    fn test_memory_to_bits_saturates() {
        assert_eq!(Memory::new(u64::MAX, MemoryUnit::Terabyte).to_bits(), u64::MAX);
        assert_eq!(Memory::new(0, MemoryUnit::Terabyte).to_bits(), 0);
    }

    #[test]
    fn test_memory_units_compare_in_bits() {
        let one_gb = Memory::gigabytes(1);
        let mb_1024 = Memory::new(1024, MemoryUnit::Megabyte);
        assert_eq!(one_gb.to_bits(), mb_1024.to_bits());
    }

    #[test]
    fn test_empty_filter_matches_everything() {
        let filter = Filter::default();
        assert!(filter.matches(&Laptop::default()));
        assert!(filter.matches(&laptop(99_999.0, 64, 5.0, Memory::gigabytes(128))));
    }

    #[test]
    fn test_filter_bounds_are_inclusive() {
        let filter = Filter {
            max_price_usd: 2000.0,
            min_cpu_cores: 4,
            min_cpu_ghz: 2.5,
            min_ram: Memory::gigabytes(8),
        };
        assert!(filter.matches(&laptop(2000.0, 4, 2.5, Memory::gigabytes(8))));
    }

    #[test]
    fn test_filter_rejects_each_bound() {
        let filter = Filter {
            max_price_usd: 2000.0,
            min_cpu_cores: 4,
            min_cpu_ghz: 2.5,
            min_ram: Memory::gigabytes(8),
        };
        assert!(!filter.matches(&laptop(2000.01, 4, 2.5, Memory::gigabytes(8))));
        assert!(!filter.matches(&laptop(1500.0, 2, 2.5, Memory::gigabytes(8))));
        assert!(!filter.matches(&laptop(1500.0, 4, 2.4, Memory::gigabytes(8))));
        assert!(!filter.matches(&laptop(1500.0, 4, 2.5, Memory::new(4096, MemoryUnit::Megabyte))));
    }

    #[test]
    fn test_filter_ram_across_units() {
        let filter = Filter {
            min_ram: Memory::new(16384, MemoryUnit::Megabyte),
            ..Default::default()
        };
        assert!(filter.matches(&laptop(0.0, 0, 0.0, Memory::gigabytes(16))));
        assert!(!filter.matches(&laptop(0.0, 0, 0.0, Memory::gigabytes(15))));
    }

    #[test]
    fn test_rating_average() {
        assert_eq!(Rating::default().average(), 0.0);
        assert_eq!(Rating { count: 3, sum: 12.0 }.average(), 4.0);
    }
}
