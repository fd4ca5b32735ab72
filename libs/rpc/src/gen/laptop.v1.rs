// @generated
// This file is @generated by prost-build.
#[derive(Clone, Copy, PartialEq, Eq, Hash, ::prost::Message)]
pub struct Memory {
    #[prost(uint64, tag = "1")]
    pub value: u64,
    #[prost(enumeration = "memory::Unit", tag = "2")]
    pub unit: i32,
}
/// Nested message and enum types in `Memory`.
pub mod memory {
    #[derive(
        Clone,
        Copy,
        Debug,
        PartialEq,
        Eq,
        Hash,
        PartialOrd,
        Ord,
        ::prost::Enumeration
    )]
    #[repr(i32)]
    pub enum Unit {
        Unknown = 0,
        Bit = 1,
        Byte = 2,
        Kilobyte = 3,
        Megabyte = 4,
        Gigabyte = 5,
        Terabyte = 6,
    }
    impl Unit {
        /// String value of the enum field names used in the ProtoBuf definition.
        ///
        /// The values are not transformed in any way and thus are considered stable
        /// (if the ProtoBuf definition does not change) and safe for programmatic use.
        pub fn as_str_name(&self) -> &'static str {
            match self {
                Self::Unknown => "UNKNOWN",
                Self::Bit => "BIT",
                Self::Byte => "BYTE",
                Self::Kilobyte => "KILOBYTE",
                Self::Megabyte => "MEGABYTE",
                Self::Gigabyte => "GIGABYTE",
                Self::Terabyte => "TERABYTE",
            }
        }
        /// Creates an enum from field names used in the ProtoBuf definition.
        pub fn from_str_name(value: &str) -> ::core::option::Option<Self> {
            match value {
                "UNKNOWN" => Some(Self::Unknown),
                "BIT" => Some(Self::Bit),
                "BYTE" => Some(Self::Byte),
                "KILOBYTE" => Some(Self::Kilobyte),
                "MEGABYTE" => Some(Self::Megabyte),
                "GIGABYTE" => Some(Self::Gigabyte),
                "TERABYTE" => Some(Self::Terabyte),
                _ => None,
            }
        }
    }
}
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Cpu {
    #[prost(string, tag = "1")]
    pub brand: ::prost::alloc::string::String,
    #[prost(string, tag = "2")]
    pub name: ::prost::alloc::string::String,
    #[prost(uint32, tag = "3")]
    pub number_cores: u32,
    #[prost(uint32, tag = "4")]
    pub number_threads: u32,
    #[prost(double, tag = "5")]
    pub min_ghz: f64,
    #[prost(double, tag = "6")]
    pub max_ghz: f64,
}
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Gpu {
    #[prost(string, tag = "1")]
    pub brand: ::prost::alloc::string::String,
    #[prost(string, tag = "2")]
    pub name: ::prost::alloc::string::String,
    #[prost(double, tag = "3")]
    pub min_ghz: f64,
    #[prost(double, tag = "4")]
    pub max_ghz: f64,
    #[prost(message, optional, tag = "5")]
    pub memory: ::core::option::Option<Memory>,
}
#[derive(Clone, Copy, PartialEq, Eq, Hash, ::prost::Message)]
pub struct Storage {
    #[prost(enumeration = "storage::Driver", tag = "1")]
    pub driver: i32,
    #[prost(message, optional, tag = "2")]
    pub memory: ::core::option::Option<Memory>,
}
/// Nested message and enum types in `Storage`.
pub mod storage {
    #[derive(
        Clone,
        Copy,
        Debug,
        PartialEq,
        Eq,
        Hash,
        PartialOrd,
        Ord,
        ::prost::Enumeration
    )]
    #[repr(i32)]
    pub enum Driver {
        Unknown = 0,
        Hdd = 1,
        Ssd = 2,
    }
    impl Driver {
        /// String value of the enum field names used in the ProtoBuf definition.
        ///
        /// The values are not transformed in any way and thus are considered stable
        /// (if the ProtoBuf definition does not change) and safe for programmatic use.
        pub fn as_str_name(&self) -> &'static str {
            match self {
                Self::Unknown => "UNKNOWN",
                Self::Hdd => "HDD",
                Self::Ssd => "SSD",
            }
        }
        /// Creates an enum from field names used in the ProtoBuf definition.
        pub fn from_str_name(value: &str) -> ::core::option::Option<Self> {
            match value {
                "UNKNOWN" => Some(Self::Unknown),
                "HDD" => Some(Self::Hdd),
                "SSD" => Some(Self::Ssd),
                _ => None,
            }
        }
    }
}
#[derive(Clone, Copy, PartialEq, ::prost::Message)]
pub struct Screen {
    #[prost(float, tag = "1")]
    pub size_inch: f32,
    #[prost(message, optional, tag = "2")]
    pub resolution: ::core::option::Option<screen::Resolution>,
    #[prost(enumeration = "screen::Panel", tag = "3")]
    pub panel: i32,
    #[prost(bool, tag = "4")]
    pub multitouch: bool,
}
/// Nested message and enum types in `Screen`.
pub mod screen {
    #[derive(Clone, Copy, PartialEq, Eq, Hash, ::prost::Message)]
    pub struct Resolution {
        #[prost(uint32, tag = "1")]
        pub width: u32,
        #[prost(uint32, tag = "2")]
        pub height: u32,
    }
    #[derive(
        Clone,
        Copy,
        Debug,
        PartialEq,
        Eq,
        Hash,
        PartialOrd,
        Ord,
        ::prost::Enumeration
    )]
    #[repr(i32)]
    pub enum Panel {
        Unknown = 0,
        Ips = 1,
        Oled = 2,
    }
    impl Panel {
        /// String value of the enum field names used in the ProtoBuf definition.
        ///
        /// The values are not transformed in any way and thus are considered stable
        /// (if the ProtoBuf definition does not change) and safe for programmatic use.
        pub fn as_str_name(&self) -> &'static str {
            match self {
                Self::Unknown => "UNKNOWN",
                Self::Ips => "IPS",
                Self::Oled => "OLED",
            }
        }
        /// Creates an enum from field names used in the ProtoBuf definition.
        pub fn from_str_name(value: &str) -> ::core::option::Option<Self> {
            match value {
                "UNKNOWN" => Some(Self::Unknown),
                "IPS" => Some(Self::Ips),
                "OLED" => Some(Self::Oled),
                _ => None,
            }
        }
    }
}
#[derive(Clone, Copy, PartialEq, Eq, Hash, ::prost::Message)]
pub struct Keyboard {
    #[prost(enumeration = "keyboard::Layout", tag = "1")]
    pub layout: i32,
    #[prost(bool, tag = "2")]
    pub backlit: bool,
}
/// Nested message and enum types in `Keyboard`.
pub mod keyboard {
    #[derive(
        Clone,
        Copy,
        Debug,
        PartialEq,
        Eq,
        Hash,
        PartialOrd,
        Ord,
        ::prost::Enumeration
    )]
    #[repr(i32)]
    pub enum Layout {
        Unknown = 0,
        Qwerty = 1,
        Qwertz = 2,
        Azerty = 3,
    }
    impl Layout {
        /// String value of the enum field names used in the ProtoBuf definition.
        ///
        /// The values are not transformed in any way and thus are considered stable
        /// (if the ProtoBuf definition does not change) and safe for programmatic use.
        pub fn as_str_name(&self) -> &'static str {
            match self {
                Self::Unknown => "UNKNOWN",
                Self::Qwerty => "QWERTY",
                Self::Qwertz => "QWERTZ",
                Self::Azerty => "AZERTY",
            }
        }
        /// Creates an enum from field names used in the ProtoBuf definition.
        pub fn from_str_name(value: &str) -> ::core::option::Option<Self> {
            match value {
                "UNKNOWN" => Some(Self::Unknown),
                "QWERTY" => Some(Self::Qwerty),
                "QWERTZ" => Some(Self::Qwertz),
                "AZERTY" => Some(Self::Azerty),
                _ => None,
            }
        }
    }
}
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Laptop {
    #[prost(string, tag = "1")]
    pub id: ::prost::alloc::string::String,
    #[prost(string, tag = "2")]
    pub brand: ::prost::alloc::string::String,
    #[prost(string, tag = "3")]
    pub name: ::prost::alloc::string::String,
    #[prost(message, optional, tag = "4")]
    pub cpu: ::core::option::Option<Cpu>,
    #[prost(message, optional, tag = "5")]
    pub ram: ::core::option::Option<Memory>,
    #[prost(message, repeated, tag = "6")]
    pub gpus: ::prost::alloc::vec::Vec<Gpu>,
    #[prost(message, repeated, tag = "7")]
    pub storages: ::prost::alloc::vec::Vec<Storage>,
    #[prost(message, optional, tag = "8")]
    pub screen: ::core::option::Option<Screen>,
    #[prost(message, optional, tag = "9")]
    pub keyboard: ::core::option::Option<Keyboard>,
    #[prost(double, tag = "12")]
    pub price_usd: f64,
    #[prost(uint32, tag = "13")]
    pub release_year: u32,
    /// Unix timestamp in seconds
    #[prost(int64, tag = "14")]
    pub updated_at: i64,
    #[prost(oneof = "laptop::Weight", tags = "10, 11")]
    pub weight: ::core::option::Option<laptop::Weight>,
}
/// Nested message and enum types in `Laptop`.
pub mod laptop {
    #[derive(Clone, Copy, PartialEq, ::prost::Oneof)]
    pub enum Weight {
        #[prost(double, tag = "10")]
        WeightKg(f64),
        #[prost(double, tag = "11")]
        WeightLb(f64),
    }
}
#[derive(Clone, Copy, PartialEq, ::prost::Message)]
pub struct Filter {
    #[prost(double, tag = "1")]
    pub max_price_usd: f64,
    #[prost(uint32, tag = "2")]
    pub min_cpu_cores: u32,
    #[prost(double, tag = "3")]
    pub min_cpu_ghz: f64,
    #[prost(message, optional, tag = "4")]
    pub min_ram: ::core::option::Option<Memory>,
}
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct CreateLaptopRequest {
    #[prost(message, optional, tag = "1")]
    pub laptop: ::core::option::Option<Laptop>,
}
#[derive(Clone, PartialEq, Eq, Hash, ::prost::Message)]
pub struct CreateLaptopResponse {
    #[prost(string, tag = "1")]
    pub id: ::prost::alloc::string::String,
}
#[derive(Clone, Copy, PartialEq, ::prost::Message)]
pub struct SearchLaptopRequest {
    #[prost(message, optional, tag = "1")]
    pub filter: ::core::option::Option<Filter>,
}
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct SearchLaptopResponse {
    #[prost(message, optional, tag = "1")]
    pub laptop: ::core::option::Option<Laptop>,
}
#[derive(Clone, PartialEq, Eq, Hash, ::prost::Message)]
pub struct ImageInfo {
    #[prost(string, tag = "1")]
    pub laptop_id: ::prost::alloc::string::String,
    #[prost(string, tag = "2")]
    pub image_type: ::prost::alloc::string::String,
}
#[derive(Clone, PartialEq, Eq, Hash, ::prost::Message)]
pub struct UploadImageRequest {
    #[prost(oneof = "upload_image_request::Data", tags = "1, 2")]
    pub data: ::core::option::Option<upload_image_request::Data>,
}
/// Nested message and enum types in `UploadImageRequest`.
pub mod upload_image_request {
    #[derive(Clone, PartialEq, Eq, Hash, ::prost::Oneof)]
    pub enum Data {
        #[prost(message, tag = "1")]
        Info(super::ImageInfo),
        #[prost(bytes, tag = "2")]
        ChunkData(::prost::alloc::vec::Vec<u8>),
    }
}
#[derive(Clone, PartialEq, Eq, Hash, ::prost::Message)]
pub struct UploadImageResponse {
    #[prost(string, tag = "1")]
    pub id: ::prost::alloc::string::String,
    #[prost(uint32, tag = "2")]
    pub size: u32,
}
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct RateLaptopRequest {
    #[prost(string, tag = "1")]
    pub laptop_id: ::prost::alloc::string::String,
    #[prost(double, tag = "2")]
    pub score: f64,
}
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct RateLaptopResponse {
    #[prost(string, tag = "1")]
    pub laptop_id: ::prost::alloc::string::String,
    #[prost(uint32, tag = "2")]
    pub rated_count: u32,
    #[prost(double, tag = "3")]
    pub average_score: f64,
}
include!("laptop.v1.tonic.rs");
// @@protoc_insertion_point(module)
