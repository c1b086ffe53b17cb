//! Hamming code word construction.
//!
//! Positions in a code word are 1-indexed. Every position whose index is a
//! power of two holds a parity bit; all other positions carry the data bits
//! in order. Each parity bit covers exactly the positions whose index has
//! the parity position's bit set, which lets a receiver locate a single
//! flipped bit by summing the failed parity positions.
//!
//! An 8 bit payload comes out as 12 bits with parity at positions 1, 2, 4
//! and 8. The code word ends at the last data bit, so no trailing parity
//! positions are emitted.

use crate::bits::BitString;

/// Expands `data` into its Hamming code word.
///
/// Empty input encodes to an empty code word. The output length is the
/// input length plus one parity bit per power of two that fits into the
/// resulting word: 1 data bit becomes 3, 4 become 7, 8 become 12, 11
/// become 15.
pub fn encode(data: &BitString) -> BitString {
    let mut word: Vec<bool> = Vec::with_capacity(data.len() + 4);

    // lay the data bits out around zeroed parity placeholders
    for bit in data.bits() {
        while is_parity_position(word.len() + 1) {
            word.push(false);
        }
        word.push(bit);
    }

    // fill in the parity bits. parity positions never cover each other, so
    // the placeholders left above don't leak into any checksum.
    for parity in 1..=word.len() {
        if !is_parity_position(parity) {
            continue;
        }
        let mut check = false;
        for position in 1..=word.len() {
            if covers(position, parity) {
                check ^= word[position - 1];
            }
        }
        word[parity - 1] = check;
    }

    BitString::from_bits(word)
}

/// Whether the 1-indexed `position` holds a parity bit, i.e. is a power of
/// two.
fn is_parity_position(position: usize) -> bool {
    position.is_power_of_two()
}

/// Whether the bit at `position` is covered by the parity bit at `parity`:
/// its index has the parity bit's position bit set, and it is not the
/// parity bit itself.
fn covers(position: usize, parity: usize) -> bool {
    position != parity && position & parity != 0
}
