//! Signed-digit recoding of scalars. Every maximal run of more than two
//! consecutive 1 bits is rewritten as a -1 digit, a stretch of zeros and
//! a +1 carry into the terminating zero, so the multiplier can trade a
//! long streak of additions for a single subtraction.

/// Recodes a big-endian byte string into `8 * n.len()` digits over
/// {-1, 0, 1}, lowest-order digit first. Leading zero bytes of oversized
/// buffers survive as leading zero digits. A run of 1 digits that extends
/// to the top of the buffer has no terminating zero and is left in binary
/// form.
pub fn recode(n: &[u8]) -> Vec<i8> {
    // unpack into bits, lowest order first
    let mut digits = vec![0i8; n.len() * 8];
    for (i, byte) in n.iter().enumerate() {
        for j in 0..8 {
            digits[(n.len() - 1 - i) * 8 + j] = ((byte >> j) & 1) as i8;
        }
    }

    // rewrite runs; start marks the first digit of the current run,
    // len counts its 1 digits
    let mut start = 0;
    let mut len = 0;
    for i in 0..digits.len() {
        if digits[i] == 1 {
            if i >= 1 && digits[i - 1] == 0 {
                start = i;
            }
            len += 1;
        } else if digits[i] == 0 {
            if len > 2 {
                digits[start] = -1;
                for digit in digits.iter_mut().take(start + len).skip(start + 1) {
                    *digit = 0;
                }
                // the terminating zero absorbs the carry and opens a new run
                digits[i] = 1;
                start = i;
                len = 1;
            } else {
                len = 0;
            }
        }
    }
    digits
}
