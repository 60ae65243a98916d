#![forbid(unsafe_code)]
//! QR code encoding.
//!
//! This module turns text or bytes into a finished QR Code Model 2 symbol (versions 1–40, all four
//! error correction levels, numeric / alphanumeric / byte segments). The renderer never looks
//! inside it: the only thing it hands on is the module grid, see [`crate::grid::ModuleGrid`].

use serde::{Deserialize, Serialize};

/// A QR Code symbol, a square grid of dark and light modules.
///
/// Instances are immutable after creation.
///
/// # Example
///
/// ```rust
/// use qistyle::qrcode::{QrCode, QrCodeEcc};
///
/// let qr = QrCode::encode_text("Hello, World!", QrCodeEcc::Low).unwrap();
/// assert_eq!(qr.size(), 21);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QrCode {
    version: Version,
    /// Width and height in modules, `version * 4 + 17`.
    size: i32,
    ecl: QrCodeEcc,
    mask: Mask,
    /// Row-major, `true` = dark.
    modules: Vec<bool>,
    /// Function pattern flags, only needed while the symbol is being built.
    isfunction: Vec<bool>,
}

impl QrCode {
    /// Encodes a text string at the given error correction level.
    ///
    /// The smallest version that fits is chosen and the error correction level is boosted when
    /// that does not increase the version.
    pub fn encode_text(text: &str, ecl: QrCodeEcc) -> Result<Self, DataTooLong> {
        let segs = QrSegment::make_segments(text);
        QrCode::encode_segments_advanced(&segs, ecl, Version::MIN, Version::MAX, None, true)
    }

    /// Encodes arbitrary bytes in byte mode.
    pub fn encode_binary(data: &[u8], ecl: QrCodeEcc) -> Result<Self, DataTooLong> {
        let segs = [QrSegment::make_bytes(data)];
        QrCode::encode_segments_advanced(&segs, ecl, Version::MIN, Version::MAX, None, true)
    }

    /// Encodes the given segments with full control over the version range, mask and ECL boost.
    ///
    /// # Arguments
    ///
    /// * `segs` - Segments to concatenate.
    /// * `ecl` - Minimum error correction level.
    /// * `minversion` / `maxversion` - Inclusive version search range.
    /// * `mask` - Fixed mask, or `None` to pick the one with the lowest penalty.
    /// * `boostecl` - Raise the ECL while the data still fits the chosen version.
    pub fn encode_segments_advanced(
        segs: &[QrSegment],
        mut ecl: QrCodeEcc,
        minversion: Version,
        maxversion: Version,
        mask: Option<Mask>,
        boostecl: bool
    ) -> Result<Self, DataTooLong> {
        assert!(minversion <= maxversion, "Invalid value");

        // Find the minimal version number to use
        let mut version: Version = minversion;
        let datausedbits: usize = loop {
            let datacapacitybits: usize = QrCode::get_num_data_codewords(version, ecl) * 8;
            let dataused: Option<usize> = QrSegment::get_total_bits(segs, version);
            if let Some(n) = dataused.filter(|&n| n <= datacapacitybits) {
                break n;
            } else if version >= maxversion {
                return Err(match dataused {
                    None => DataTooLong::SegmentTooLong,
                    Some(n) => DataTooLong::DataOverCapacity(n, datacapacitybits),
                });
            } else {
                version = Version::new(version.value() + 1);
            }
        };

        for &newecl in &[QrCodeEcc::Medium, QrCodeEcc::Quartile, QrCodeEcc::High] {
            if boostecl && datausedbits <= QrCode::get_num_data_codewords(version, newecl) * 8 {
                ecl = newecl;
            }
        }

        let mut bb = BitBuffer(Vec::with_capacity(datausedbits));
        for seg in segs {
            bb.append_bits(seg.mode.mode_bits(), 4);
            bb.append_bits(seg.numchars as u32, seg.mode.num_char_count_bits(version));
            bb.0.extend_from_slice(&seg.data);
        }
        debug_assert_eq!(bb.0.len(), datausedbits);

        // Terminator, then pad to a byte boundary
        let datacapacitybits: usize = QrCode::get_num_data_codewords(version, ecl) * 8;
        let numzerobits: usize = core::cmp::min(4, datacapacitybits - bb.0.len());
        bb.append_bits(0, numzerobits as u8);
        let numzerobits: usize = bb.0.len().wrapping_neg() & 7;
        bb.append_bits(0, numzerobits as u8);
        debug_assert_eq!(bb.0.len() % 8, 0);

        for &padbyte in [0xec, 0x11].iter().cycle() {
            if bb.0.len() >= datacapacitybits {
                break;
            }
            bb.append_bits(padbyte, 8);
        }

        let mut datacodewords = vec![0u8; bb.0.len() / 8];
        for (i, &bit) in bb.0.iter().enumerate() {
            datacodewords[i >> 3] |= u8::from(bit) << (7 - (i & 7));
        }
        Ok(QrCode::encode_codewords(version, ecl, &datacodewords, mask))
    }

    /// Builds the symbol from already padded data codewords.
    ///
    /// This is a low-level API; most callers want [`QrCode::encode_text`].
    pub fn encode_codewords(
        version: Version,
        ecl: QrCodeEcc,
        datacodewords: &[u8],
        msk: Option<Mask>
    ) -> Self {
        let size = usize::from(version.value()) * 4 + 17;
        let mut result = Self {
            version,
            size: size as i32,
            ecl,
            mask: Mask::new(0),
            modules: vec![false; size * size],
            isfunction: vec![false; size * size],
        };
        result.draw_function_patterns();
        let allcodewords: Vec<u8> = result.add_ecc_and_interleave(datacodewords);
        result.draw_codewords(&allcodewords);

        let msk: Mask = msk.unwrap_or_else(|| result.choose_mask());
        result.mask = msk;
        result.apply_mask(msk);
        result.draw_format_bits(msk);
        result.isfunction = Vec::new();
        result
    }

    /// Returns this QR Code's version, in the range [1, 40].
    pub fn version(&self) -> Version {
        self.version
    }

    /// Returns this QR Code's size, in the range [21, 177].
    pub fn size(&self) -> i32 {
        self.size
    }

    /// Returns the error correction level actually used (after any boost).
    pub fn error_correction_level(&self) -> QrCodeEcc {
        self.ecl
    }

    /// Returns this QR Code's mask, in the range [0, 7].
    pub fn mask(&self) -> Mask {
        self.mask
    }

    /// Returns the color of the module at the given coordinates.
    ///
    /// `true` is dark. Coordinates outside the symbol are light.
    ///
    /// * `x` - X-coordinate (0 is left).
    /// * `y` - Y-coordinate (0 is top).
    pub fn get_module(&self, x: i32, y: i32) -> bool {
        let range = 0..self.size;
        range.contains(&x) && range.contains(&y) && self.module(x, y)
    }

    fn module(&self, x: i32, y: i32) -> bool {
        self.modules[(y * self.size + x) as usize]
    }

    fn set_function_module(&mut self, x: i32, y: i32, isdark: bool) {
        let index = (y * self.size + x) as usize;
        self.modules[index] = isdark;
        self.isfunction[index] = true;
    }

    /*---- Function patterns ----*/

    fn draw_function_patterns(&mut self) {
        let size: i32 = self.size;
        for i in 0..size {
            self.set_function_module(6, i, i % 2 == 0);
            self.set_function_module(i, 6, i % 2 == 0);
        }

        self.draw_finder_pattern(3, 3);
        self.draw_finder_pattern(size - 4, 3);
        self.draw_finder_pattern(3, size - 4);

        // Alignment patterns, skipping the three finder corners
        let alignpatpos: Vec<i32> = self.get_alignment_pattern_positions();
        let last: usize = alignpatpos.len().saturating_sub(1);
        for (i, &pos0) in alignpatpos.iter().enumerate() {
            for (j, &pos1) in alignpatpos.iter().enumerate() {
                let corner = (i == 0 && j == 0) || (i == 0 && j == last) || (i == last && j == 0);
                if !corner {
                    self.draw_alignment_pattern(pos0, pos1);
                }
            }
        }

        // Dummy format bits reserve the area until the mask is known
        self.draw_format_bits(Mask::new(0));
        self.draw_version();
    }

    fn draw_finder_pattern(&mut self, x: i32, y: i32) {
        for dy in -4..=4 {
            for dx in -4..=4 {
                let (xx, yy) = (x + dx, y + dy);
                if (0..self.size).contains(&xx) && (0..self.size).contains(&yy) {
                    let dist: i32 = dx.abs().max(dy.abs());
                    self.set_function_module(xx, yy, dist != 2 && dist != 4);
                }
            }
        }
    }

    fn draw_alignment_pattern(&mut self, x: i32, y: i32) {
        for dy in -2..=2 {
            for dx in -2..=2 {
                self.set_function_module(x + dx, y + dy, dx.abs().max(dy.abs()) != 1);
            }
        }
    }

    fn draw_format_bits(&mut self, mask: Mask) {
        let bits: u32 = {
            let data = u32::from((self.ecl.format_bits() << 3) | mask.value());
            let mut rem: u32 = data;
            for _ in 0..10 {
                rem = (rem << 1) ^ ((rem >> 9) * 0x537);
            }
            ((data << 10) | rem) ^ 0x5412
        };
        debug_assert_eq!(bits >> 15, 0);

        // First copy, around the top left finder
        for i in 0..6 {
            self.set_function_module(8, i, get_bit(bits, i));
        }
        self.set_function_module(8, 7, get_bit(bits, 6));
        self.set_function_module(8, 8, get_bit(bits, 7));
        self.set_function_module(7, 8, get_bit(bits, 8));
        for i in 9..15 {
            self.set_function_module(14 - i, 8, get_bit(bits, i));
        }

        // Second copy, split between the other two finders
        let size: i32 = self.size;
        for i in 0..8 {
            self.set_function_module(size - 1 - i, 8, get_bit(bits, i));
        }
        for i in 8..15 {
            self.set_function_module(8, size - 15 + i, get_bit(bits, i));
        }
        self.set_function_module(8, size - 8, true);
    }

    fn draw_version(&mut self) {
        let ver = u32::from(self.version.value());
        if ver < 7 {
            return;
        }
        let bits: u32 = {
            let mut rem: u32 = ver;
            for _ in 0..12 {
                rem = (rem << 1) ^ ((rem >> 11) * 0x1f25);
            }
            (ver << 12) | rem
        };
        for i in 0..18 {
            let bit: bool = get_bit(bits, i);
            let a: i32 = self.size - 11 + (i % 3);
            let b: i32 = i / 3;
            self.set_function_module(a, b, bit);
            self.set_function_module(b, a, bit);
        }
    }

    /*---- Codewords and masking ----*/

    fn add_ecc_and_interleave(&self, data: &[u8]) -> Vec<u8> {
        let ver: Version = self.version;
        let ecl: QrCodeEcc = self.ecl;
        assert_eq!(data.len(), QrCode::get_num_data_codewords(ver, ecl), "Illegal argument");

        let numblocks: usize = QrCode::table_get(&NUM_ERROR_CORRECTION_BLOCKS, ver, ecl);
        let blockecclen: usize = QrCode::table_get(&ECC_CODEWORDS_PER_BLOCK, ver, ecl);
        let rawcodewords: usize = QrCode::get_num_raw_data_modules(ver) / 8;
        let numshortblocks: usize = numblocks - (rawcodewords % numblocks);
        let shortblocklen: usize = rawcodewords / numblocks;

        let rs = ReedSolomonGenerator::new(blockecclen);
        let mut blocks: Vec<Vec<u8>> = Vec::with_capacity(numblocks);
        let mut k: usize = 0;
        for i in 0..numblocks {
            let datlen: usize = shortblocklen - blockecclen + usize::from(i >= numshortblocks);
            let mut dat: Vec<u8> = data[k..k + datlen].to_vec();
            k += datlen;
            let ecc: Vec<u8> = rs.compute_remainder(&dat);
            if i < numshortblocks {
                // Placeholder so every block has the same length; skipped below
                dat.push(0);
            }
            dat.extend_from_slice(&ecc);
            blocks.push(dat);
        }

        let mut result: Vec<u8> = Vec::with_capacity(rawcodewords);
        for i in 0..=shortblocklen {
            for (j, block) in blocks.iter().enumerate() {
                if i != shortblocklen - blockecclen || j >= numshortblocks {
                    result.push(block[i]);
                }
            }
        }
        result
    }

    fn draw_codewords(&mut self, data: &[u8]) {
        assert_eq!(
            data.len(),
            QrCode::get_num_raw_data_modules(self.version) / 8,
            "Illegal argument"
        );
        let size: i32 = self.size;
        let mut i: usize = 0;
        let mut right: i32 = size - 1;
        while right >= 1 {
            if right == 6 {
                right = 5;
            }
            for vert in 0..size {
                for j in 0..2 {
                    let x: i32 = right - j;
                    let upward: bool = ((right + 1) & 2) == 0;
                    let y: i32 = if upward { size - 1 - vert } else { vert };
                    let index = (y * size + x) as usize;
                    if !self.isfunction[index] && i < data.len() * 8 {
                        self.modules[index] = get_bit(u32::from(data[i >> 3]), 7 - (i & 7) as i32);
                        i += 1;
                    }
                }
            }
            right -= 2;
        }
        debug_assert_eq!(i, data.len() * 8);
    }

    /// XORs the mask onto every non-function module; applying it twice undoes it.
    fn apply_mask(&mut self, mask: Mask) {
        let size: i32 = self.size;
        for y in 0..size {
            for x in 0..size {
                let invert: bool = match mask.value() {
                    0 => (x + y) % 2 == 0,
                    1 => y % 2 == 0,
                    2 => x % 3 == 0,
                    3 => (x + y) % 3 == 0,
                    4 => (x / 3 + y / 2) % 2 == 0,
                    5 => (x * y) % 2 + (x * y) % 3 == 0,
                    6 => ((x * y) % 2 + (x * y) % 3) % 2 == 0,
                    7 => ((x + y) % 2 + (x * y) % 3) % 2 == 0,
                    _ => unreachable!(),
                };
                let index = (y * size + x) as usize;
                self.modules[index] ^= invert & !self.isfunction[index];
            }
        }
    }

    fn choose_mask(&mut self) -> Mask {
        let mut best = Mask::new(0);
        let mut minpenalty = i32::MAX;
        for i in 0u8..8 {
            let candidate = Mask::new(i);
            self.apply_mask(candidate);
            self.draw_format_bits(candidate);
            let penalty: i32 = self.get_penalty_score();
            if penalty < minpenalty {
                best = candidate;
                minpenalty = penalty;
            }
            self.apply_mask(candidate);
        }
        best
    }

    fn get_penalty_score(&self) -> i32 {
        let size: i32 = self.size;
        let mut result: i32 = 0;

        for y in 0..size {
            result += self.line_penalty((0..size).map(|x| self.module(x, y)));
        }
        for x in 0..size {
            result += self.line_penalty((0..size).map(|y| self.module(x, y)));
        }

        for y in 0..size - 1 {
            for x in 0..size - 1 {
                let color: bool = self.module(x, y);
                if
                    color == self.module(x + 1, y) &&
                    color == self.module(x, y + 1) &&
                    color == self.module(x + 1, y + 1)
                {
                    result += PENALTY_N2;
                }
            }
        }

        let dark = self.modules.iter().filter(|&&m| m).count() as i32;
        let total: i32 = size * size;
        let k: i32 = ((dark * 20 - total * 10).abs() + total - 1) / total - 1;
        result + k * PENALTY_N4
    }

    /// Run-length and finder-like penalties for one row or column.
    fn line_penalty(&self, line: impl Iterator<Item = bool>) -> i32 {
        let mut result: i32 = 0;
        let mut runcolor = false;
        let mut runlen: i32 = 0;
        let mut runhistory = FinderPenalty::new(self.size);
        for color in line {
            if color == runcolor {
                runlen += 1;
                if runlen == 5 {
                    result += PENALTY_N1;
                } else if runlen > 5 {
                    result += 1;
                }
            } else {
                runhistory.add_history(runlen);
                if !runcolor {
                    result += runhistory.count_patterns() * PENALTY_N3;
                }
                runcolor = color;
                runlen = 1;
            }
        }
        result + runhistory.terminate_and_count(runcolor, runlen) * PENALTY_N3
    }

    /*---- Tables ----*/

    fn get_alignment_pattern_positions(&self) -> Vec<i32> {
        let ver = i32::from(self.version.value());
        if ver == 1 {
            return Vec::new();
        }
        let numalign: i32 = ver / 7 + 2;
        let step: i32 = if ver == 32 { 26 } else { ((ver * 4 + numalign * 2 + 1) / (numalign * 2 - 2)) * 2 };
        let mut result: Vec<i32> = (0..numalign - 1).map(|i| self.size - 7 - i * step).collect();
        result.push(6);
        result.reverse();
        result
    }

    fn get_num_raw_data_modules(ver: Version) -> usize {
        let ver = usize::from(ver.value());
        let mut result: usize = (16 * ver + 128) * ver + 64;
        if ver >= 2 {
            let numalign: usize = ver / 7 + 2;
            result -= (25 * numalign - 10) * numalign - 55;
            if ver >= 7 {
                result -= 36;
            }
        }
        result
    }

    fn get_num_data_codewords(ver: Version, ecl: QrCodeEcc) -> usize {
        QrCode::get_num_raw_data_modules(ver) / 8 -
            QrCode::table_get(&ECC_CODEWORDS_PER_BLOCK, ver, ecl) *
                QrCode::table_get(&NUM_ERROR_CORRECTION_BLOCKS, ver, ecl)
    }

    fn table_get(table: &'static [[i8; 41]; 4], ver: Version, ecl: QrCodeEcc) -> usize {
        table[ecl.ordinal()][usize::from(ver.value())] as usize
    }
}

struct ReedSolomonGenerator {
    divisor: Vec<u8>,
}

impl ReedSolomonGenerator {
    fn new(degree: usize) -> Self {
        assert!((1..=255).contains(&degree), "Degree out of range");
        let mut divisor = vec![0u8; degree];
        divisor[degree - 1] = 1;
        let mut root: u8 = 1;
        for _ in 0..degree {
            for j in 0..degree {
                divisor[j] = Self::multiply(divisor[j], root);
                if j + 1 < degree {
                    divisor[j] ^= divisor[j + 1];
                }
            }
            root = Self::multiply(root, 0x02);
        }
        Self { divisor }
    }

    fn compute_remainder(&self, data: &[u8]) -> Vec<u8> {
        let mut result = vec![0u8; self.divisor.len()];
        for b in data {
            let factor: u8 = b ^ result.remove(0);
            result.push(0);
            for (x, &y) in result.iter_mut().zip(self.divisor.iter()) {
                *x ^= Self::multiply(y, factor);
            }
        }
        result
    }

    /// Multiplication in GF(2^8/0x11D).
    fn multiply(x: u8, y: u8) -> u8 {
        let mut z: u8 = 0;
        for i in (0..8).rev() {
            z = (z << 1) ^ ((z >> 7) * 0x1d);
            z ^= ((y >> i) & 1) * x;
        }
        z
    }
}

struct FinderPenalty {
    qr_size: i32,
    run_history: [i32; 7],
}

impl FinderPenalty {
    fn new(size: i32) -> Self {
        Self {
            qr_size: size,
            run_history: [0; 7],
        }
    }

    fn add_history(&mut self, mut currentrunlength: i32) {
        if self.run_history[0] == 0 {
            // Light border before the first module
            currentrunlength += self.qr_size;
        }
        self.run_history.copy_within(0..6, 1);
        self.run_history[0] = currentrunlength;
    }

    fn count_patterns(&self) -> i32 {
        let rh = &self.run_history;
        let n = rh[1];
        let core = n > 0 && rh[2] == n && rh[3] == n * 3 && rh[4] == n && rh[5] == n;
        i32::from(core && rh[0] >= n * 4 && rh[6] >= n) + i32::from(core && rh[6] >= n * 4 && rh[0] >= n)
    }

    fn terminate_and_count(mut self, currentruncolor: bool, mut currentrunlength: i32) -> i32 {
        if currentruncolor {
            self.add_history(currentrunlength);
            currentrunlength = 0;
        }
        currentrunlength += self.qr_size;
        self.add_history(currentrunlength);
        self.count_patterns()
    }
}

const PENALTY_N1: i32 = 3;
const PENALTY_N2: i32 = 3;
const PENALTY_N3: i32 = 40;
const PENALTY_N4: i32 = 10;

static ECC_CODEWORDS_PER_BLOCK: [[i8; 41]; 4] = [
    [
        -1, 7, 10, 15, 20, 26, 18, 20, 24, 30, 18, 20, 24, 26, 30, 22, 24, 28, 30, 28, 28, 28, 28, 30,
        30, 26, 28, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30,
    ], // Low
    [
        -1, 10, 16, 26, 18, 24, 16, 18, 22, 22, 26, 30, 22, 22, 24, 24, 28, 28, 26, 26, 26, 26, 28, 28,
        28, 28, 28, 28, 28, 28, 28, 28, 28, 28, 28, 28, 28, 28, 28, 28, 28,
    ], // Medium
    [
        -1, 13, 22, 18, 26, 18, 24, 18, 22, 20, 24, 28, 26, 24, 20, 30, 24, 28, 28, 26, 30, 28, 30, 30,
        30, 30, 28, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30,
    ], // Quartile
    [
        -1, 17, 28, 22, 16, 22, 28, 26, 26, 24, 28, 24, 28, 22, 24, 24, 30, 28, 28, 26, 28, 30, 24, 30,
        30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30,
    ], // High
];

static NUM_ERROR_CORRECTION_BLOCKS: [[i8; 41]; 4] = [
    [
        -1, 1, 1, 1, 1, 1, 2, 2, 2, 2, 4, 4, 4, 4, 4, 6, 6, 6, 6, 7, 8, 8, 9, 9, 10, 12, 12, 12,
        13, 14, 15, 16, 17, 18, 19, 19, 20, 21, 22, 24, 25,
    ], // Low
    [
        -1, 1, 1, 1, 2, 2, 4, 4, 4, 5, 5, 5, 8, 9, 9, 10, 10, 11, 13, 14, 16, 17, 17, 18, 20, 21,
        23, 25, 26, 28, 29, 31, 33, 35, 37, 38, 40, 43, 45, 47, 49,
    ], // Medium
    [
        -1, 1, 1, 2, 2, 4, 4, 6, 6, 8, 8, 8, 10, 12, 16, 12, 17, 16, 18, 21, 20, 23, 23, 25, 27, 29,
        34, 34, 35, 38, 40, 43, 45, 48, 51, 53, 56, 59, 62, 65, 68,
    ], // Quartile
    [
        -1, 1, 1, 2, 4, 4, 4, 5, 6, 8, 8, 11, 11, 16, 16, 18, 16, 19, 21, 25, 25, 25, 34, 30, 32, 35,
        37, 40, 42, 45, 48, 51, 54, 57, 60, 63, 66, 70, 74, 77, 81,
    ], // High
];

/// Error correction level for a QR code.
///
/// Serialized with the single-letter names `"L"`, `"M"`, `"Q"` and `"H"`.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Debug, Serialize, Deserialize)]
pub enum QrCodeEcc {
    /// Tolerates ~7% erroneous codewords.
    #[serde(rename = "L")]
    Low,
    /// Tolerates ~15% erroneous codewords.
    #[serde(rename = "M")]
    Medium,
    /// Tolerates ~25% erroneous codewords.
    #[serde(rename = "Q")]
    Quartile,
    /// Tolerates ~30% erroneous codewords.
    #[serde(rename = "H")]
    High,
}

impl QrCodeEcc {
    fn ordinal(self) -> usize {
        use QrCodeEcc::*;
        match self {
            Low => 0,
            Medium => 1,
            Quartile => 2,
            High => 3,
        }
    }

    /// Returns an unsigned 2-bit integer (in the range 0 to 3).
    fn format_bits(self) -> u8 {
        use QrCodeEcc::*;
        match self {
            Low => 1,
            Medium => 0,
            Quartile => 3,
            High => 2,
        }
    }
}

/// A segment of data in a QR code: a mode, a character count and the encoded bits.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QrSegment {
    mode: QrSegmentMode,
    numchars: usize,
    data: Vec<bool>,
}

impl QrSegment {
    /// Creates a byte mode segment.
    pub fn make_bytes(data: &[u8]) -> Self {
        let mut bb = BitBuffer(Vec::with_capacity(data.len() * 8));
        for &b in data {
            bb.append_bits(u32::from(b), 8);
        }
        QrSegment::new(QrSegmentMode::Byte, data.len(), bb.0)
    }

    /// Creates a numeric mode segment.
    ///
    /// # Panics
    ///
    /// Panics if `text` contains non-digit characters.
    pub fn make_numeric(text: &str) -> Self {
        assert!(QrSegment::is_numeric(text), "String contains non-numeric characters");
        let mut bb = BitBuffer(Vec::with_capacity(text.len() * 3 + (text.len() + 2) / 3));
        for chunk in text.as_bytes().chunks(3) {
            let value = chunk.iter().fold(0u32, |acc, &b| acc * 10 + u32::from(b - b'0'));
            bb.append_bits(value, chunk.len() as u8 * 3 + 1);
        }
        QrSegment::new(QrSegmentMode::Numeric, text.len(), bb.0)
    }

    /// Creates an alphanumeric mode segment.
    ///
    /// Allowed characters: 0–9, A–Z (uppercase), space, `$`, `%`, `*`, `+`, `-`, `.`, `/`, `:`.
    ///
    /// # Panics
    ///
    /// Panics if `text` contains characters outside that set.
    pub fn make_alphanumeric(text: &str) -> Self {
        assert!(
            QrSegment::is_alphanumeric(text),
            "String contains unencodable characters in alphanumeric mode"
        );
        let values: Vec<u32> = text
            .chars()
            .map(|c| ALPHANUMERIC_CHARSET.find(c).unwrap_or(0) as u32)
            .collect();
        let mut bb = BitBuffer(Vec::with_capacity(text.len() * 6));
        for pair in values.chunks(2) {
            match *pair {
                [a, b] => bb.append_bits(a * 45 + b, 11),
                [a] => bb.append_bits(a, 6),
                _ => unreachable!(),
            }
        }
        QrSegment::new(QrSegmentMode::Alphanumeric, text.len(), bb.0)
    }

    /// Picks the most compact single segment for the text.
    pub fn make_segments(text: &str) -> Vec<Self> {
        if text.is_empty() {
            Vec::new()
        } else if QrSegment::is_numeric(text) {
            vec![QrSegment::make_numeric(text)]
        } else if QrSegment::is_alphanumeric(text) {
            vec![QrSegment::make_alphanumeric(text)]
        } else {
            vec![QrSegment::make_bytes(text.as_bytes())]
        }
    }

    pub fn new(mode: QrSegmentMode, numchars: usize, data: Vec<bool>) -> Self {
        Self { mode, numchars, data }
    }

    pub fn mode(&self) -> QrSegmentMode {
        self.mode
    }

    pub fn num_chars(&self) -> usize {
        self.numchars
    }

    fn get_total_bits(segs: &[Self], version: Version) -> Option<usize> {
        let mut result: usize = 0;
        for seg in segs {
            let ccbits: u8 = seg.mode.num_char_count_bits(version);
            if let Some(limit) = (1usize).checked_shl(ccbits.into()) {
                if seg.numchars >= limit {
                    return None;
                }
            }
            result = result.checked_add(4 + usize::from(ccbits))?;
            result = result.checked_add(seg.data.len())?;
        }
        Some(result)
    }

    pub fn is_numeric(text: &str) -> bool {
        text.chars().all(|c| c.is_ascii_digit())
    }

    pub fn is_alphanumeric(text: &str) -> bool {
        text.chars().all(|c| ALPHANUMERIC_CHARSET.contains(c))
    }
}

static ALPHANUMERIC_CHARSET: &str = "0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ $%*+-./:";

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum QrSegmentMode {
    Numeric,
    Alphanumeric,
    Byte,
}

impl QrSegmentMode {
    fn mode_bits(self) -> u32 {
        use QrSegmentMode::*;
        match self {
            Numeric => 0x1,
            Alphanumeric => 0x2,
            Byte => 0x4,
        }
    }

    fn num_char_count_bits(self, ver: Version) -> u8 {
        use QrSegmentMode::*;
        (match self {
            Numeric => [10, 12, 14],
            Alphanumeric => [9, 11, 13],
            Byte => [8, 16, 16],
        })[usize::from((ver.value() + 7) / 17)]
    }
}

struct BitBuffer(Vec<bool>);

impl BitBuffer {
    fn append_bits(&mut self, val: u32, len: u8) {
        assert!(len <= 31 && (val >> len) == 0, "Value out of range");
        self.0.extend((0..i32::from(len)).rev().map(|i| get_bit(val, i)));
    }
}

/// Error type for when data exceeds QR code capacity.
///
/// Ways to handle this:
///
/// - Decrease the error correction level if it was greater than `QrCodeEcc::Low`.
/// - Increase the maxversion argument if it was less than `Version::MAX`.
/// - Change the text to fit the character set of a denser segment mode.
/// - Make the data shorter.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DataTooLong {
    /// A segment's character count does not fit its count field.
    #[error("Segment too long")]
    SegmentTooLong,
    /// Data length exceeds capacity.
    #[error("Data length = {0} bits, Max capacity = {1} bits")]
    DataOverCapacity(usize, usize),
}

/// A QR code version (1–40).
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Debug)]
pub struct Version(u8);

impl Version {
    pub const MIN: Version = Version(1);
    pub const MAX: Version = Version(40);

    /// # Panics
    ///
    /// Panics if the number is outside the range [1, 40].
    pub const fn new(ver: u8) -> Self {
        assert!(
            Version::MIN.value() <= ver && ver <= Version::MAX.value(),
            "Version number out of range"
        );
        Self(ver)
    }

    pub const fn value(self) -> u8 {
        self.0
    }
}

/// A mask pattern (0–7).
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Debug)]
pub struct Mask(u8);

impl Mask {
    /// # Panics
    ///
    /// Panics if the number is outside the range [0, 7].
    pub const fn new(mask: u8) -> Self {
        assert!(mask <= 7, "Mask value out of range");
        Self(mask)
    }

    pub const fn value(self) -> u8 {
        self.0
    }
}

fn get_bit(x: u32, i: i32) -> bool {
    ((x >> i) & 1) != 0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_numeric() {
        assert!(QrSegment::is_numeric("1234567890"));
        assert!(!QrSegment::is_numeric("1234abc"));
    }

    #[test]
    fn test_is_alphanumeric() {
        assert!(QrSegment::is_alphanumeric("HELLO WORLD"));
        assert!(!QrSegment::is_alphanumeric("Hello World"));
    }

    #[test]
    fn test_segment_bit_lengths() {
        assert_eq!(QrSegment::make_numeric("01234567").data.len(), 27);
        assert_eq!(QrSegment::make_alphanumeric("AC-42").data.len(), 28);
        assert_eq!(QrSegment::make_bytes(b"ab").data.len(), 16);
    }

    #[test]
    fn test_short_text_is_version_one() {
        let qr = QrCode::encode_text("Hello, World!", QrCodeEcc::Low).unwrap();
        assert_eq!(qr.version(), Version::new(1));
        assert_eq!(qr.size(), 21);
        // Boosting lands on the strongest level that still fits version 1
        assert!(qr.error_correction_level() >= QrCodeEcc::Low);
    }

    #[test]
    fn test_finder_patterns_present() {
        let qr = QrCode::encode_text("HELLO WORLD", QrCodeEcc::Medium).unwrap();
        let size = qr.size();
        for &(ox, oy) in &[(0, 0), (size - 7, 0), (0, size - 7)] {
            for i in 0..7 {
                assert!(qr.get_module(ox + i, oy));
                assert!(qr.get_module(ox + i, oy + 6));
                assert!(qr.get_module(ox, oy + i));
                assert!(qr.get_module(ox + 6, oy + i));
            }
            assert!(!qr.get_module(ox + 1, oy + 1));
            assert!(qr.get_module(ox + 3, oy + 3));
        }
        assert!(!qr.get_module(-1, 0));
        assert!(!qr.get_module(0, size));
    }

    #[test]
    fn test_fixed_mask_is_kept() {
        let segs = QrSegment::make_segments("314159265358979");
        let qr = QrCode::encode_segments_advanced(
            &segs,
            QrCodeEcc::Quartile,
            Version::MIN,
            Version::MAX,
            Some(Mask::new(5)),
            false
        ).unwrap();
        assert_eq!(qr.mask(), Mask::new(5));
        assert_eq!(qr.error_correction_level(), QrCodeEcc::Quartile);
    }

    #[test]
    fn test_large_payload_uses_version_info() {
        let text = "a".repeat(400);
        let qr = QrCode::encode_text(&text, QrCodeEcc::Low).unwrap();
        assert!(qr.version().value() >= 7);
        assert_eq!(qr.size(), i32::from(qr.version().value()) * 4 + 17);
    }

    #[test]
    fn test_data_too_long() {
        let text = "a".repeat(3000);
        let err = QrCode::encode_text(&text, QrCodeEcc::High).unwrap_err();
        assert!(matches!(err, DataTooLong::DataOverCapacity(_, _)));
    }
}
