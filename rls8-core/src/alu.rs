use crate::consts::flags::{FL_EQ, FL_GT, FL_LT};
use crate::err::CpuError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AluOp {
    ADD,
    SUB,
    MUL,
    DIV,
    MOD,
    INC,
    DEC,
    AND,
    OR,
    XOR,
    NOT,
    SHL,
    SHR,
    CMP,
}

impl AluOp {
    ///
    /// Whether the operation consumes its second operand. INC, DEC and
    /// NOT are encoded with a register operand but only ever read the
    /// first one.
    ///
    pub fn takes_operand_b(&self) -> bool {
        !matches!(self, AluOp::INC | AluOp::DEC | AluOp::NOT)
    }
}

///
/// Result of an ALU operation: either an 8-bit value destined for the
/// first operand register, or a new flags register value (CMP).
///
#[derive(Debug, PartialEq, Eq)]
pub enum AluOutput {
    Value(u8),
    Flags(u8),
}

///
/// Apply one ALU operation to the given register values. Every numeric
/// result is masked to 8 bits before it leaves here, so the destination
/// register can never hold more than a byte. CMP computes the flags with
/// equality checked first, so exactly one of E/G/L is set.
///
/// # Arguments
///
///  - `op` - ALU operation to perform
///  - `a` - value of the first operand register
///  - `b` - value of the second operand register, 0 when absent
///  - `pc` - address of the faulting instruction, for diagnostics
///
pub fn apply(op: AluOp, a: u8, b: u8, pc: u8) -> Result<AluOutput, CpuError> {
    let res = match op {
        AluOp::ADD => a.wrapping_add(b),
        AluOp::SUB => a.wrapping_sub(b),
        AluOp::MUL => a.wrapping_mul(b),
        AluOp::DIV => match a.checked_div(b) {
            Some(v) => v,
            None => return Err(CpuError::DivideByZero { op, pc }),
        },
        AluOp::MOD => match a.checked_rem(b) {
            Some(v) => v,
            None => return Err(CpuError::DivideByZero { op, pc }),
        },
        AluOp::INC => a.wrapping_add(1),
        AluOp::DEC => a.wrapping_sub(1),
        AluOp::AND => a & b,
        AluOp::OR => a | b,
        AluOp::XOR => a ^ b,
        AluOp::NOT => !a,
        // Shift amounts can be anything a register holds; past 7 bits
        // the result is simply zero.
        AluOp::SHL => (a as u32).checked_shl(b as u32).unwrap_or(0) as u8,
        AluOp::SHR => (a as u32).checked_shr(b as u32).unwrap_or(0) as u8,
        AluOp::CMP => {
            let fl = if a == b {
                FL_EQ
            } else if a > b {
                FL_GT
            } else {
                FL_LT
            };
            return Ok(AluOutput::Flags(fl));
        }
    };
    Ok(AluOutput::Value(res))
}

#[cfg(test)]
mod alu_tests {
    use super::*;

    fn value(op: AluOp, a: u8, b: u8) -> u8 {
        match apply(op, a, b, 0).unwrap() {
            AluOutput::Value(v) => v,
            AluOutput::Flags(f) => panic!("expected a value, got flags 0b{:03b}", f),
        }
    }

    fn flags(a: u8, b: u8) -> u8 {
        match apply(AluOp::CMP, a, b, 0).unwrap() {
            AluOutput::Value(v) => panic!("expected flags, got value {}", v),
            AluOutput::Flags(f) => f,
        }
    }

    #[test]
    fn add_masks_to_eight_bits() {
        for a in 0..=255u8 {
            for b in 0..=255u8 {
                let expect = ((a as u16 + b as u16) & 0xFF) as u8;
                assert_eq!(expect, value(AluOp::ADD, a, b));
            }
        }
    }

    #[test]
    fn sub_wraps_below_zero() {
        assert_eq!(0xFF, value(AluOp::SUB, 0, 1));
        assert_eq!(0, value(AluOp::SUB, 0x80, 0x80));
        for a in 0..=255u8 {
            for b in 0..=255u8 {
                let expect = ((a as i16 - b as i16).rem_euclid(256)) as u8;
                assert_eq!(expect, value(AluOp::SUB, a, b));
            }
        }
    }

    #[test]
    fn mul_masks_to_eight_bits() {
        for a in 0..=255u8 {
            for b in 0..=255u8 {
                let expect = ((a as u16 * b as u16) & 0xFF) as u8;
                assert_eq!(expect, value(AluOp::MUL, a, b));
            }
        }
    }

    #[test]
    fn inc_dec_ignore_second_operand() {
        assert_eq!(6, value(AluOp::INC, 5, 0xAA));
        assert_eq!(4, value(AluOp::DEC, 5, 0xAA));
        assert_eq!(0, value(AluOp::INC, 0xFF, 0));
        assert_eq!(0xFF, value(AluOp::DEC, 0, 0));
    }

    #[test]
    fn bitwise_ops() {
        for a in 0..=255u8 {
            for b in 0..=255u8 {
                assert_eq!(a & b, value(AluOp::AND, a, b));
                assert_eq!(a | b, value(AluOp::OR, a, b));
                assert_eq!(a ^ b, value(AluOp::XOR, a, b));
            }
            assert_eq!(!a, value(AluOp::NOT, a, 0x55));
        }
    }

    #[test]
    fn shifts_mask_and_saturate() {
        assert_eq!(0b0101_0100, value(AluOp::SHL, 0b1010_1010, 1));
        assert_eq!(0b0101_0101, value(AluOp::SHR, 0b1010_1010, 1));
        // Shifting a byte by 8 or more always yields zero.
        for b in 8..=255u8 {
            assert_eq!(0, value(AluOp::SHL, 0xFF, b));
            assert_eq!(0, value(AluOp::SHR, 0xFF, b));
        }
    }

    #[test]
    fn div_rounds_down() {
        assert_eq!(3, value(AluOp::DIV, 7, 2));
        assert_eq!(1, value(AluOp::MOD, 7, 2));
    }

    #[test]
    fn div_by_zero_is_an_error() {
        let res = apply(AluOp::DIV, 10, 0, 0x12);
        assert!(matches!(
            res,
            Err(CpuError::DivideByZero { op: AluOp::DIV, pc: 0x12 })
        ));

        let res = apply(AluOp::MOD, 10, 0, 0x34);
        assert!(matches!(
            res,
            Err(CpuError::DivideByZero { op: AluOp::MOD, pc: 0x34 })
        ));
    }

    #[test]
    fn cmp_is_reflexive() {
        for a in 0..=255u8 {
            assert_eq!(FL_EQ, flags(a, a));
        }
    }

    #[test]
    fn cmp_sets_exactly_one_flag() {
        for a in 0..=255u8 {
            for b in 0..=255u8 {
                let fl = flags(a, b);
                assert_eq!(1, fl.count_ones(), "flags 0b{:03b} for {} vs {}", fl, a, b);
                if a == b {
                    assert_eq!(FL_EQ, fl);
                } else if a > b {
                    assert_eq!(FL_GT, fl);
                } else {
                    assert_eq!(FL_LT, fl);
                }
            }
        }
    }
}
