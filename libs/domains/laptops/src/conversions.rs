//! Laptop proto ↔ domain conversions
//!
//! Proto → domain conversions validate enum values and return `Err(String)`, which the
//! gRPC layer turns into INVALID_ARGUMENT via `grpc_client::ToTonicResult`.

use rpc::laptop as proto;
use rpc::laptop::{keyboard::Layout, memory::Unit, screen::Panel, storage::Driver};

use crate::models::{
    Cpu, Filter, Gpu, Keyboard, KeyboardLayout, Laptop, Memory, MemoryUnit, Panel as ScreenPanel,
    Resolution, Screen, Storage, StorageDriver, Weight,
};

pub use grpc_client::conversions::*;

// ============================================================================
// Enum Conversions
// ============================================================================

impl From<MemoryUnit> for i32 {
    fn from(unit: MemoryUnit) -> Self {
        match unit {
            MemoryUnit::Bit => Unit::Bit as i32,
            MemoryUnit::Byte => Unit::Byte as i32,
            MemoryUnit::Kilobyte => Unit::Kilobyte as i32,
            MemoryUnit::Megabyte => Unit::Megabyte as i32,
            MemoryUnit::Gigabyte => Unit::Gigabyte as i32,
            MemoryUnit::Terabyte => Unit::Terabyte as i32,
        }
    }
}

impl TryFrom<i32> for MemoryUnit {
    type Error = String;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        match Unit::try_from(value) {
            Ok(Unit::Bit) => Ok(MemoryUnit::Bit),
            Ok(Unit::Byte) => Ok(MemoryUnit::Byte),
            Ok(Unit::Kilobyte) => Ok(MemoryUnit::Kilobyte),
            Ok(Unit::Megabyte) => Ok(MemoryUnit::Megabyte),
            Ok(Unit::Gigabyte) => Ok(MemoryUnit::Gigabyte),
            Ok(Unit::Terabyte) => Ok(MemoryUnit::Terabyte),
            Ok(Unit::Unknown) | Err(_) => Err(format!("Invalid memory unit: {}", value)),
        }
    }
}

impl From<StorageDriver> for i32 {
    fn from(driver: StorageDriver) -> Self {
        match driver {
            StorageDriver::Hdd => Driver::Hdd as i32,
            StorageDriver::Ssd => Driver::Ssd as i32,
        }
    }
}

impl TryFrom<i32> for StorageDriver {
    type Error = String;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        match Driver::try_from(value) {
            Ok(Driver::Hdd) => Ok(StorageDriver::Hdd),
            Ok(Driver::Ssd) => Ok(StorageDriver::Ssd),
            Ok(Driver::Unknown) | Err(_) => Err(format!("Invalid storage driver: {}", value)),
        }
    }
}

impl From<ScreenPanel> for i32 {
    fn from(panel: ScreenPanel) -> Self {
        match panel {
            ScreenPanel::Ips => Panel::Ips as i32,
            ScreenPanel::Oled => Panel::Oled as i32,
        }
    }
}

impl TryFrom<i32> for ScreenPanel {
    type Error = String;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        match Panel::try_from(value) {
            Ok(Panel::Ips) => Ok(ScreenPanel::Ips),
            Ok(Panel::Oled) => Ok(ScreenPanel::Oled),
            Ok(Panel::Unknown) | Err(_) => Err(format!("Invalid screen panel: {}", value)),
        }
    }
}

impl From<KeyboardLayout> for i32 {
    fn from(layout: KeyboardLayout) -> Self {
        match layout {
            KeyboardLayout::Qwerty => Layout::Qwerty as i32,
            KeyboardLayout::Qwertz => Layout::Qwertz as i32,
            KeyboardLayout::Azerty => Layout::Azerty as i32,
        }
    }
}

impl TryFrom<i32> for KeyboardLayout {
    type Error = String;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        match Layout::try_from(value) {
            Ok(Layout::Qwerty) => Ok(KeyboardLayout::Qwerty),
            Ok(Layout::Qwertz) => Ok(KeyboardLayout::Qwertz),
            Ok(Layout::Azerty) => Ok(KeyboardLayout::Azerty),
            Ok(Layout::Unknown) | Err(_) => Err(format!("Invalid keyboard layout: {}", value)),
        }
    }
}

// ============================================================================
// Component Conversions
// ============================================================================

impl From<Memory> for proto::Memory {
    fn from(memory: Memory) -> Self {
        proto::Memory {
            value: memory.value,
            unit: memory.unit.into(),
        }
    }
}

impl TryFrom<proto::Memory> for Memory {
    type Error = String;

    fn try_from(proto: proto::Memory) -> Result<Self, Self::Error> {
        // An all-zero message is how proto3 spells "no memory".
        if proto.value == 0 && proto.unit == Unit::Unknown as i32 {
            return Ok(Memory::default());
        }
        Ok(Memory::new(proto.value, proto.unit.try_into()?))
    }
}

fn opt_memory(proto: Option<proto::Memory>) -> Result<Memory, String> {
    proto.map(Memory::try_from).transpose().map(Option::unwrap_or_default)
}

impl From<Cpu> for proto::Cpu {
    fn from(cpu: Cpu) -> Self {
        proto::Cpu {
            brand: cpu.brand,
            name: cpu.name,
            number_cores: cpu.number_cores,
            number_threads: cpu.number_threads,
            min_ghz: cpu.min_ghz,
            max_ghz: cpu.max_ghz,
        }
    }
}

impl From<proto::Cpu> for Cpu {
    fn from(proto: proto::Cpu) -> Self {
        Cpu {
            brand: proto.brand,
            name: proto.name,
            number_cores: proto.number_cores,
            number_threads: proto.number_threads,
            min_ghz: proto.min_ghz,
            max_ghz: proto.max_ghz,
        }
    }
}

impl From<Gpu> for proto::Gpu {
    fn from(gpu: Gpu) -> Self {
        proto::Gpu {
            brand: gpu.brand,
            name: gpu.name,
            min_ghz: gpu.min_ghz,
            max_ghz: gpu.max_ghz,
            memory: Some(gpu.memory.into()),
        }
    }
}

impl TryFrom<proto::Gpu> for Gpu {
    type Error = String;

    fn try_from(proto: proto::Gpu) -> Result<Self, Self::Error> {
        Ok(Gpu {
            brand: proto.brand,
            name: proto.name,
            min_ghz: proto.min_ghz,
            max_ghz: proto.max_ghz,
            memory: opt_memory(proto.memory)?,
        })
    }
}

impl From<Storage> for proto::Storage {
    fn from(storage: Storage) -> Self {
        proto::Storage {
            driver: storage.driver.into(),
            memory: Some(storage.memory.into()),
        }
    }
}

impl TryFrom<proto::Storage> for Storage {
    type Error = String;

    fn try_from(proto: proto::Storage) -> Result<Self, Self::Error> {
        Ok(Storage {
            driver: proto.driver.try_into()?,
            memory: opt_memory(proto.memory)?,
        })
    }
}

impl From<Screen> for proto::Screen {
    fn from(screen: Screen) -> Self {
        proto::Screen {
            size_inch: screen.size_inch,
            resolution: Some(proto::screen::Resolution {
                width: screen.resolution.width,
                height: screen.resolution.height,
            }),
            panel: screen.panel.into(),
            multitouch: screen.multitouch,
        }
    }
}

impl TryFrom<proto::Screen> for Screen {
    type Error = String;

    fn try_from(proto: proto::Screen) -> Result<Self, Self::Error> {
        let resolution = proto.resolution.unwrap_or_default();
        Ok(Screen {
            size_inch: proto.size_inch,
            resolution: Resolution {
                width: resolution.width,
                height: resolution.height,
            },
            panel: proto.panel.try_into()?,
            multitouch: proto.multitouch,
        })
    }
}

impl From<Keyboard> for proto::Keyboard {
    fn from(keyboard: Keyboard) -> Self {
        proto::Keyboard {
            layout: keyboard.layout.into(),
            backlit: keyboard.backlit,
        }
    }
}

impl TryFrom<proto::Keyboard> for Keyboard {
    type Error = String;

    fn try_from(proto: proto::Keyboard) -> Result<Self, Self::Error> {
        Ok(Keyboard {
            layout: proto.layout.try_into()?,
            backlit: proto.backlit,
        })
    }
}

impl From<Weight> for proto::laptop::Weight {
    fn from(weight: Weight) -> Self {
        match weight {
            Weight::Kilograms(kg) => proto::laptop::Weight::WeightKg(kg),
            Weight::Pounds(lb) => proto::laptop::Weight::WeightLb(lb),
        }
    }
}

impl From<proto::laptop::Weight> for Weight {
    fn from(proto: proto::laptop::Weight) -> Self {
        match proto {
            proto::laptop::Weight::WeightKg(kg) => Weight::Kilograms(kg),
            proto::laptop::Weight::WeightLb(lb) => Weight::Pounds(lb),
        }
    }
}

// ============================================================================
// Laptop and Filter
// ============================================================================

impl From<Laptop> for proto::Laptop {
    fn from(laptop: Laptop) -> Self {
        proto::Laptop {
            id: laptop.id,
            brand: laptop.brand,
            name: laptop.name,
            cpu: Some(laptop.cpu.into()),
            ram: Some(laptop.ram.into()),
            gpus: laptop.gpus.into_iter().map(Into::into).collect(),
            storages: laptop.storages.into_iter().map(Into::into).collect(),
            screen: laptop.screen.map(Into::into),
            keyboard: laptop.keyboard.map(Into::into),
            weight: laptop.weight.map(Into::into),
            price_usd: laptop.price_usd,
            release_year: laptop.release_year,
            updated_at: laptop.updated_at.map(datetime_to_timestamp).unwrap_or_default(),
        }
    }
}

impl TryFrom<proto::Laptop> for Laptop {
    type Error = String;

    fn try_from(proto: proto::Laptop) -> Result<Self, Self::Error> {
        if !proto.price_usd.is_finite() || proto.price_usd < 0.0 {
            return Err(format!("Invalid price: {}", proto.price_usd));
        }

        Ok(Laptop {
            id: proto.id,
            brand: proto.brand,
            name: proto.name,
            cpu: proto.cpu.map(Cpu::from).unwrap_or_default(),
            ram: opt_memory(proto.ram)?,
            gpus: proto
                .gpus
                .into_iter()
                .map(Gpu::try_from)
                .collect::<Result<_, _>>()?,
            storages: proto
                .storages
                .into_iter()
                .map(Storage::try_from)
                .collect::<Result<_, _>>()?,
            screen: proto.screen.map(Screen::try_from).transpose()?,
            keyboard: proto.keyboard.map(Keyboard::try_from).transpose()?,
            weight: proto.weight.map(Weight::from),
            price_usd: proto.price_usd,
            release_year: proto.release_year,
            updated_at: timestamp_to_datetime(proto.updated_at),
        })
    }
}

impl From<Filter> for proto::Filter {
    fn from(filter: Filter) -> Self {
        proto::Filter {
            max_price_usd: filter.max_price_usd,
            min_cpu_cores: filter.min_cpu_cores,
            min_cpu_ghz: filter.min_cpu_ghz,
            min_ram: Some(filter.min_ram.into()),
        }
    }
}

impl TryFrom<proto::Filter> for Filter {
    type Error = String;

    fn try_from(proto: proto::Filter) -> Result<Self, Self::Error> {
        if proto.max_price_usd.is_nan() || proto.max_price_usd < 0.0 {
            return Err(format!("Invalid max price: {}", proto.max_price_usd));
        }
        if proto.min_cpu_ghz.is_nan() || proto.min_cpu_ghz < 0.0 {
            return Err(format!("Invalid min cpu ghz: {}", proto.min_cpu_ghz));
        }

        Ok(Filter {
            max_price_usd: proto.max_price_usd,
            min_cpu_cores: proto.min_cpu_cores,
            min_cpu_ghz: proto.min_cpu_ghz,
            min_ram: opt_memory(proto.min_ram)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn full_laptop() -> Laptop {
        Laptop {
            id: "6ba7b810-9dad-11d1-80b4-00c04fd430c8".to_string(),
            brand: "Apple".to_string(),
            name: "Macbook Pro".to_string(),
            cpu: Cpu {
                brand: "Intel".to_string(),
                name: "Core i7-9750H".to_string(),
                number_cores: 6,
                number_threads: 12,
                min_ghz: 2.6,
                max_ghz: 4.5,
            },
            ram: Memory::gigabytes(16),
            gpus: vec![Gpu {
                brand: "NVIDIA".to_string(),
                name: "RTX 2070".to_string(),
                min_ghz: 1.2,
                max_ghz: 1.8,
                memory: Memory::gigabytes(4),
            }],
            storages: vec![
                Storage {
                    driver: StorageDriver::Ssd,
                    memory: Memory::new(512, MemoryUnit::Gigabyte),
                },
                Storage {
                    driver: StorageDriver::Hdd,
                    memory: Memory::new(2, MemoryUnit::Terabyte),
                },
            ],
            screen: Some(Screen {
                size_inch: 15.6,
                resolution: Resolution {
                    width: 3840,
                    height: 2160,
                },
                panel: ScreenPanel::Oled,
                multitouch: true,
            }),
            keyboard: Some(Keyboard {
                layout: KeyboardLayout::Qwertz,
                backlit: true,
            }),
            weight: Some(Weight::Pounds(4.3)),
            price_usd: 2499.0,
            release_year: 2021,
            updated_at: Some(Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap()),
        }
    }

    #[test]
    fn test_laptop_survives_the_wire() {
        let laptop = full_laptop();
        let proto: proto::Laptop = laptop.clone().into();
        assert_eq!(proto.storages[1].driver, Driver::Hdd as i32);
        assert!(matches!(proto.weight, Some(proto::laptop::Weight::WeightLb(_))));

        let back = Laptop::try_from(proto).unwrap();
        assert_eq!(back, laptop);
    }

    #[test]
    fn test_sparse_proto_laptop_uses_defaults() {
        let laptop = Laptop::try_from(proto::Laptop::default()).unwrap();
        assert_eq!(laptop, Laptop::default());
    }

    #[test]
    fn test_unknown_enum_values_are_rejected() {
        let proto = proto::Laptop {
            storages: vec![proto::Storage {
                driver: Driver::Unknown as i32,
                memory: None,
            }],
            ..Default::default()
        };
        assert!(Laptop::try_from(proto).unwrap_err().contains("storage driver"));

        let proto = proto::Laptop {
            keyboard: Some(proto::Keyboard {
                layout: 42,
                backlit: false,
            }),
            ..Default::default()
        };
        assert!(Laptop::try_from(proto).unwrap_err().contains("keyboard layout"));

        let proto = proto::Laptop {
            ram: Some(proto::Memory {
                value: 8,
                unit: Unit::Unknown as i32,
            }),
            ..Default::default()
        };
        assert!(Laptop::try_from(proto).unwrap_err().contains("memory unit"));
    }

    #[test]
    fn test_invalid_price_is_rejected() {
        for price in [f64::NAN, f64::INFINITY, -1.0] {
            let proto = proto::Laptop {
                price_usd: price,
                ..Default::default()
            };
            assert!(Laptop::try_from(proto).is_err());
        }
    }

    #[test]
    fn test_filter_conversion() {
        let proto = proto::Filter {
            max_price_usd: 3000.0,
            min_cpu_cores: 4,
            min_cpu_ghz: 2.5,
            min_ram: Some(proto::Memory {
                value: 8,
                unit: Unit::Gigabyte as i32,
            }),
        };
        let filter = Filter::try_from(proto).unwrap();
        assert_eq!(filter.min_ram, Memory::gigabytes(8));
        assert_eq!(filter.min_cpu_cores, 4);

        assert_eq!(
            Filter::try_from(proto::Filter::default()).unwrap(),
            Filter::default()
        );
        assert!(Filter::try_from(proto::Filter {
            max_price_usd: -5.0,
            ..Default::default()
        })
        .is_err());
    }
}
