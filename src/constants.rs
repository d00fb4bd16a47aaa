/// Scale in effect until the first `SCAL` is seen.
pub const DEFAULT_SCALE: [f64; 3] = [1.0, 1.0, 1.0];
/// Max in-memory size for raw GPMF files, 50MB.
pub const GPMF_RAW_MAX_SIZE: u64 = 50_000_000;
/// GPMF KLV header size: FourCC, type, struct size, repeat.
pub const GPMF_KLV_HEADER_SIZE: u64 = 8;
