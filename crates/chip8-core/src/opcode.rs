use std::fmt;

/// Decoded CHIP-8 instruction. `x`/`y` name V registers, `nnn` is a 12-bit address.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum OpCode {
    /// 00E0
    Cls,
    /// 00EE
    Ret,
    /// 0nnn
    Sys { nnn: u16 },
    /// 1nnn
    Jp { nnn: u16 },
    /// 2nnn
    Call { nnn: u16 },
    /// 3xkk
    SeImm { x: u8, kk: u8 },
    /// 4xkk
    SneImm { x: u8, kk: u8 },
    /// 5xy0
    SeReg { x: u8, y: u8 },
    /// 6xkk
    LdImm { x: u8, kk: u8 },
    /// 7xkk
    AddImm { x: u8, kk: u8 },
    /// 8xy0
    LdReg { x: u8, y: u8 },
    /// 8xy1
    Or { x: u8, y: u8 },
    /// 8xy2
    And { x: u8, y: u8 },
    /// 8xy3
    Xor { x: u8, y: u8 },
    /// 8xy4
    AddReg { x: u8, y: u8 },
    /// 8xy5
    Sub { x: u8, y: u8 },
    /// 8xy6
    Shr { x: u8, y: u8 },
    /// 8xy7
    Subn { x: u8, y: u8 },
    /// 8xyE
    Shl { x: u8, y: u8 },
    /// 9xy0
    SneReg { x: u8, y: u8 },
    /// Annn
    LdI { nnn: u16 },
    /// Bnnn
    JpV0 { nnn: u16 },
    /// Cxkk
    Rnd { x: u8, kk: u8 },
    /// Dxyn
    Drw { x: u8, y: u8, n: u8 },
    /// Ex9E
    Skp { x: u8 },
    /// ExA1
    Sknp { x: u8 },
    /// Fx07
    LdVxDt { x: u8 },
    /// Fx0A
    LdVxK { x: u8 },
    /// Fx15
    LdDtVx { x: u8 },
    /// Fx18
    LdStVx { x: u8 },
    /// Fx1E
    AddI { x: u8 },
    /// Fx29
    LdF { x: u8 },
    /// Fx33
    LdB { x: u8 },
    /// Fx55
    LdIndVx { x: u8 },
    /// Fx65
    LdVxInd { x: u8 },
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct InvalidOpcode(pub u16);

impl fmt::Display for InvalidOpcode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid opcode: 0x{:04X}", self.0)
    }
}

#[inline]
fn nnn(word: u16) -> u16 {
    word & 0x0FFF
}

#[inline]
fn kk(word: u16) -> u8 {
    (word & 0x00FF) as u8
}

#[inline]
fn x(word: u16) -> u8 {
    ((word & 0x0F00) >> 8) as u8
}

#[inline]
fn y(word: u16) -> u8 {
    ((word & 0x00F0) >> 4) as u8
}

#[inline]
fn n(word: u16) -> u8 {
    (word & 0x000F) as u8
}

pub fn decode_instruction(word: u16) -> Result<OpCode, InvalidOpcode> {
    let op = match word & 0xF000 {
        0x0000 => match word {
            0x00E0 => OpCode::Cls,
            0x00EE => OpCode::Ret,
            _ => OpCode::Sys { nnn: nnn(word) },
        },
        0x1000 => OpCode::Jp { nnn: nnn(word) },
        0x2000 => OpCode::Call { nnn: nnn(word) },
        0x3000 => OpCode::SeImm { x: x(word), kk: kk(word) },
        0x4000 => OpCode::SneImm { x: x(word), kk: kk(word) },
        0x5000 if n(word) == 0 => OpCode::SeReg { x: x(word), y: y(word) },
        0x6000 => OpCode::LdImm { x: x(word), kk: kk(word) },
        0x7000 => OpCode::AddImm { x: x(word), kk: kk(word) },
        0x8000 => {
            let (x, y) = (x(word), y(word));
            match n(word) {
                0x0 => OpCode::LdReg { x, y },
                0x1 => OpCode::Or { x, y },
                0x2 => OpCode::And { x, y },
                0x3 => OpCode::Xor { x, y },
                0x4 => OpCode::AddReg { x, y },
                0x5 => OpCode::Sub { x, y },
                0x6 => OpCode::Shr { x, y },
                0x7 => OpCode::Subn { x, y },
                0xE => OpCode::Shl { x, y },
                _ => return Err(InvalidOpcode(word)),
            }
        }
        0x9000 if n(word) == 0 => OpCode::SneReg { x: x(word), y: y(word) },
        0xA000 => OpCode::LdI { nnn: nnn(word) },
        0xB000 => OpCode::JpV0 { nnn: nnn(word) },
        0xC000 => OpCode::Rnd { x: x(word), kk: kk(word) },
        0xD000 => OpCode::Drw { x: x(word), y: y(word), n: n(word) },
        0xE000 => match kk(word) {
            0x9E => OpCode::Skp { x: x(word) },
            0xA1 => OpCode::Sknp { x: x(word) },
            _ => return Err(InvalidOpcode(word)),
        },
        0xF000 => match kk(word) {
            0x07 => OpCode::LdVxDt { x: x(word) },
            0x0A => OpCode::LdVxK { x: x(word) },
            0x15 => OpCode::LdDtVx { x: x(word) },
            0x18 => OpCode::LdStVx { x: x(word) },
            0x1E => OpCode::AddI { x: x(word) },
            0x29 => OpCode::LdF { x: x(word) },
            0x33 => OpCode::LdB { x: x(word) },
            0x55 => OpCode::LdIndVx { x: x(word) },
            0x65 => OpCode::LdVxInd { x: x(word) },
            _ => return Err(InvalidOpcode(word)),
        },
        _ => return Err(InvalidOpcode(word)),
    };
    Ok(op)
}

impl fmt::Display for OpCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::Cls => write!(f, "CLS"),
            Self::Ret => write!(f, "RET"),
            Self::Sys { nnn } => write!(f, "SYS 0x{nnn:03X}"),
            Self::Jp { nnn } => write!(f, "JP 0x{nnn:03X}"),
            Self::Call { nnn } => write!(f, "CALL 0x{nnn:03X}"),
            Self::SeImm { x, kk } => write!(f, "SE V{x:X}, 0x{kk:02X}"),
            Self::SneImm { x, kk } => write!(f, "SNE V{x:X}, 0x{kk:02X}"),
            Self::SeReg { x, y } => write!(f, "SE V{x:X}, V{y:X}"),
            Self::LdImm { x, kk } => write!(f, "LD V{x:X}, 0x{kk:02X}"),
            Self::AddImm { x, kk } => write!(f, "ADD V{x:X}, 0x{kk:02X}"),
            Self::LdReg { x, y } => write!(f, "LD V{x:X}, V{y:X}"),
            Self::Or { x, y } => write!(f, "OR V{x:X}, V{y:X}"),
            Self::And { x, y } => write!(f, "AND V{x:X}, V{y:X}"),
            Self::Xor { x, y } => write!(f, "XOR V{x:X}, V{y:X}"),
            Self::AddReg { x, y } => write!(f, "ADD V{x:X}, V{y:X}"),
            Self::Sub { x, y } => write!(f, "SUB V{x:X}, V{y:X}"),
            Self::Shr { x, y } => write!(f, "SHR V{x:X}, V{y:X}"),
            Self::Subn { x, y } => write!(f, "SUBN V{x:X}, V{y:X}"),
            Self::Shl { x, y } => write!(f, "SHL V{x:X}, V{y:X}"),
            Self::SneReg { x, y } => write!(f, "SNE V{x:X}, V{y:X}"),
            Self::LdI { nnn } => write!(f, "LD I, 0x{nnn:03X}"),
            Self::JpV0 { nnn } => write!(f, "JP V0, 0x{nnn:03X}"),
            Self::Rnd { x, kk } => write!(f, "RND V{x:X}, 0x{kk:02X}"),
            Self::Drw { x, y, n } => write!(f, "DRW V{x:X}, V{y:X}, {n}"),
            Self::Skp { x } => write!(f, "SKP V{x:X}"),
            Self::Sknp { x } => write!(f, "SKNP V{x:X}"),
            Self::LdVxDt { x } => write!(f, "LD V{x:X}, DT"),
            Self::LdVxK { x } => write!(f, "LD V{x:X}, K"),
            Self::LdDtVx { x } => write!(f, "LD DT, V{x:X}"),
            Self::LdStVx { x } => write!(f, "LD ST, V{x:X}"),
            Self::AddI { x } => write!(f, "ADD I, V{x:X}"),
            Self::LdF { x } => write!(f, "LD F, V{x:X}"),
            Self::LdB { x } => write!(f, "LD B, V{x:X}"),
            Self::LdIndVx { x } => write!(f, "LD [I], V{x:X}"),
            Self::LdVxInd { x } => write!(f, "LD V{x:X}, [I]"),
        }
    }
}
