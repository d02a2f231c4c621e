//! Fixed hue gradient used by the rainbow animation
//!
//! The table runs from red through blue and green back toward red, packed
//! as `0xRRGGBB`.

use crate::color::{Rgb, rgb_from_u32};

pub const RAINBOW_GRADIENT_LEN: usize = 512;

pub static RAINBOW_GRADIENT: [u32; RAINBOW_GRADIENT_LEN] = [
    0xFF4041, 0xFE4042, 0xFD4043, 0xFC4044, 0xFB4045, 0xFA4046, 0xF94047, 0xF84048,
    0xF74049, 0xF6404A, 0xF5404B, 0xF4404C, 0xF3404D, 0xF2404E, 0xF1404F, 0xF04050,
    0xEF4051, 0xEE4052, 0xED4053, 0xEC4054, 0xEB4055, 0xEA4056, 0xE94057, 0xE84058,
    0xE74059, 0xE6405A, 0xE5405B, 0xE4405C, 0xE3405D, 0xE2405E, 0xE1405F, 0xE04060,
    0xDF4061, 0xDE4062, 0xDD4063, 0xDC4064, 0xDB4065, 0xDA4066, 0xD94067, 0xD84068,
    0xD74069, 0xD6406A, 0xD5406B, 0xD4406C, 0xD3406D, 0xD2406E, 0xD1406F, 0xD04070,
    0xCF4071, 0xCE4072, 0xCD4073, 0xCC4074, 0xCB4075, 0xCA4076, 0xC94077, 0xC84078,
    0xC74079, 0xC6407A, 0xC5407B, 0xC4407C, 0xC3407D, 0xC2407E, 0xC1407F, 0xC04080,
    0xBF4081, 0xBE4082, 0xBD4083, 0xBC4084, 0xBB4085, 0xBA4086, 0xB94087, 0xB84088,
    0xB74089, 0xB6408A, 0xB5408B, 0xB4408C, 0xB3408D, 0xB2408E, 0xB1408F, 0xB04090,
    0xAF4091, 0xAE4092, 0xAD4093, 0xAC4094, 0xAB4095, 0xAA4096, 0xA94097, 0xA84098,
    0xA74099, 0xA6409A, 0xA5409B, 0xA4409C, 0xA3409D, 0xA2409E, 0xA1409F, 0xA040A0,
    0x9F40A1, 0x9E40A2, 0x9D40A3, 0x9C40A4, 0x9B40A5, 0x9A40A6, 0x9940A7, 0x9840A8,
    0x9740A9, 0x9640AA, 0x9540AB, 0x9440AC, 0x9340AD, 0x9240AE, 0x9140AF, 0x9040B0,
    0x8F40B1, 0x8E40B2, 0x8D40B3, 0x8C40B4, 0x8B40B5, 0x8A40B6, 0x8940B7, 0x8840B8,
    0x8740B9, 0x8640BA, 0x8540BB, 0x8440BC, 0x8340BD, 0x8240BE, 0x8140BF, 0x8040C0,
    0x7F40C1, 0x7E40C2, 0x7D40C3, 0x7C40C4, 0x7B40C5, 0x7A40C6, 0x7940C7, 0x7840C8,
    0x7740C9, 0x7640CA, 0x7540CB, 0x7440CC, 0x7340CD, 0x7240CE, 0x7140CF, 0x7040D0,
    0x6F40D1, 0x6E40D2, 0x6D40D3, 0x6C40D4, 0x6B40D5, 0x6A40D6, 0x6940D7, 0x6840D8,
    0x6740D9, 0x6640DA, 0x6540DB, 0x6440DC, 0x6340DD, 0x6240DE, 0x6140DF, 0x6040E0,
    0x5F40E1, 0x5E40E2, 0x5D40E3, 0x5C40E4, 0x5B40E5, 0x5A40E6, 0x5940E7, 0x5840E8,
    0x5740E9, 0x5640EA, 0x5540EB, 0x5440EC, 0x5340ED, 0x5240EE, 0x5140EF, 0x5040F0,
    0x4F40F1, 0x4E40F2, 0x4D40F3, 0x4C40F4, 0x4B40F5, 0x4A40F6, 0x4940F7, 0x4840F8,
    0x4740F9, 0x4640FA, 0x4540FB, 0x4440FC, 0x4340FD, 0x4240FE, 0x4140FF, 0x4041FF,
    0x4042FE, 0x4043FD, 0x4044FC, 0x4045FB, 0x4046FA, 0x4047F9, 0x4048F8, 0x4049F7,
    0x404AF6, 0x404BF5, 0x404CF4, 0x404DF3, 0x404EF2, 0x404FF1, 0x4050F0, 0x4051EF,
    0x4052EE, 0x4053ED, 0x4054EC, 0x4055EB, 0x4056EA, 0x4057E9, 0x4058E8, 0x4059E7,
    0x405AE6, 0x405BE5, 0x405CE4, 0x405DE3, 0x405EE2, 0x405FE1, 0x4060E0, 0x4061DF,
    0x4062DE, 0x4063DD, 0x4064DC, 0x4065DB, 0x4066DA, 0x4067D9, 0x4068D8, 0x4069D7,
    0x406AD6, 0x406BD5, 0x406CD4, 0x406DD3, 0x406ED2, 0x406FD1, 0x4070D0, 0x4071CF,
    0x4072CE, 0x4073CD, 0x4074CC, 0x4075CB, 0x4076CA, 0x4077C9, 0x4078C8, 0x4079C7,
    0x407AC6, 0x407BC5, 0x407CC4, 0x407DC3, 0x407EC2, 0x407FC1, 0x4080C0, 0x4081BF,
    0x4082BE, 0x4083BD, 0x4084BC, 0x4085BB, 0x4086BA, 0x4087B9, 0x4088B8, 0x4089B7,
    0x408AB6, 0x408BB5, 0x408CB4, 0x408DB3, 0x408EB2, 0x408FB1, 0x4090B0, 0x4091AF,
    0x4092AE, 0x4093AD, 0x4094AC, 0x4095AB, 0x4096AA, 0x4097A9, 0x4098A8, 0x4099A7,
    0x409AA6, 0x409BA5, 0x409CA4, 0x409DA3, 0x409EA2, 0x409FA1, 0x40A0A0, 0x40A19F,
    0x40A29E, 0x40A39D, 0x40A49C, 0x40A59B, 0x40A69A, 0x40A799, 0x40A898, 0x40A997,
    0x40AA96, 0x40AB95, 0x40AC94, 0x40AD93, 0x40AE92, 0x40AF91, 0x40B090, 0x40B18F,
    0x40B28E, 0x40B38D, 0x40B48C, 0x40B58B, 0x40B68A, 0x40B789, 0x40B888, 0x40B987,
    0x40BA86, 0x40BB85, 0x40BC84, 0x40BD83, 0x40BE82, 0x40BF81, 0x40C080, 0x40C17F,
    0x40C27E, 0x40C37D, 0x40C47C, 0x40C57B, 0x40C67A, 0x40C779, 0x40C878, 0x40C977,
    0x40CA76, 0x40CB75, 0x40CC74, 0x40CD73, 0x40CE72, 0x40CF71, 0x40D070, 0x40D16F,
    0x40D26E, 0x40D36D, 0x40D46C, 0x40D56B, 0x40D66A, 0x40D769, 0x40D868, 0x40D967,
    0x40DA66, 0x40DB65, 0x40DC64, 0x40DD63, 0x40DE62, 0x40DF61, 0x40E060, 0x40E15F,
    0x40E25E, 0x40E35D, 0x40E45C, 0x40E55B, 0x40E65A, 0x40E759, 0x40E858, 0x40E957,
    0x40EA56, 0x40EB55, 0x40EC54, 0x40ED53, 0x40EE52, 0x40EF51, 0x40F050, 0x40F14F,
    0x40F24E, 0x40F34D, 0x40F44C, 0x40F54B, 0x40F64A, 0x40F749, 0x40F848, 0x40F947,
    0x40FA46, 0x40FB45, 0x40FC44, 0x40FD43, 0x40FE42, 0x40FF41, 0x41FF40, 0x42FE40,
    0x43FD40, 0x44FC40, 0x45FB40, 0x46FA40, 0x47F940, 0x48F840, 0x49F740, 0x4AF640,
    0x4BF540, 0x4CF440, 0x4DF340, 0x4EF240, 0x4FF140, 0x50F040, 0x51EF40, 0x52EE40,
    0x53ED40, 0x54EC40, 0x55EB40, 0x56EA40, 0x57E940, 0x58E840, 0x59E740, 0x5AE640,
    0x5BE540, 0x5CE440, 0x5DE340, 0x5EE240, 0x5FE140, 0x60E040, 0x61DF40, 0x62DE40,
    0x63DD40, 0x64DC40, 0x65DB40, 0x66DA40, 0x67D940, 0x68D840, 0x69D740, 0x6AD640,
    0x6BD540, 0x6CD440, 0x6DD340, 0x6ED240, 0x6FD140, 0x70D040, 0x71CF40, 0x72CE40,
    0x73CD40, 0x74CC40, 0x75CB40, 0x76CA40, 0x77C940, 0x78C840, 0x79C740, 0x7AC640,
    0x7BC540, 0x7CC440, 0x7DC340, 0x7EC240, 0x7FC140, 0x80C040, 0x81BF40, 0x82BE40,
    0x83BD40, 0x84BC40, 0x85BB40, 0x86BA40, 0x87B940, 0x88B840, 0x89B740, 0x8AB640,
    0x8BB540, 0x8CB440, 0x8DB340, 0x8EB240, 0x8FB140, 0x90B040, 0x91AF40, 0x92AE40,
    0x93AD40, 0x94AC40, 0x95AB40, 0x96AA40, 0x97A940, 0x98A840, 0x99A740, 0x9AA640,
    0x9BA540, 0x9CA440, 0x9DA340, 0x9EA240, 0x9FA140, 0xA0A040, 0xA19F40, 0xA29E40,
    0xA39D40, 0xA49C40, 0xA59B40, 0xA69A40, 0xA79940, 0xA89840, 0xA99740, 0xAA9640,
    0xAB9540, 0xAC9440, 0xAD9340, 0xAE9240, 0xAF9140, 0xB09040, 0xB18F40, 0xB28E40,
    0xB38D40, 0xB48C40, 0xB58B40, 0xB68A40, 0xB78940, 0xB88840, 0xB98740, 0xBA8640,
    0xBB8540, 0xBC8440, 0xBD8340, 0xBE8240, 0xBF8140, 0xC08040, 0xC17F40, 0xC27E40,
];

/// Sample the gradient for pixel `index` out of `count`
///
/// Samples are spread evenly across the whole table, so the strip always
/// shows one complete hue cycle regardless of its length.
pub fn rainbow_sample(index: usize, count: usize) -> Rgb {
    if count == 0 {
        return rgb_from_u32(RAINBOW_GRADIENT[0]);
    }
    let position = (index * RAINBOW_GRADIENT_LEN / count) % RAINBOW_GRADIENT_LEN;
    rgb_from_u32(RAINBOW_GRADIENT[position])
}
