use bitflags::bitflags;
use serde::{Deserialize, Serialize};

bitflags! {
    /// Represents the state of modifier keys. The bits match the X11 modifier masks.
    #[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
    pub struct ModMask: u16 {
        /// Used as the zero value
        const Zero = 0;
        const Shift = 1;
        /// Caps lock
        const Lock = 1 << 1;
        const Control = 1 << 2;
        /// Mod1
        const Alt = 1 << 3;
        /// Mod2
        const NumLock = 1 << 4;
        const Mod3 = 1 << 5;
        /// Mod4
        const Super = 1 << 6;
        const Mod5 = 1 << 7;
    }
}
bitflags! {
    /// Represents the state of the mouse buttons
    #[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
    pub struct Button: u8 {
        /// Used as the zero value
        const Zero = 0;
        /// Main button (left click for right-handed)
        const Button1 = 1;
        /// Middle button (pressing the scroll wheel)
        const Button2 = 1 << 1;
        /// Secondary button (right click for right-handed)
        const Button3 = 1 << 2;
        /// Scroll wheel up
        const Button4 = 1 << 3;
        /// Scroll wheel down
        const Button5 = 1 << 4;
    }
}

impl ModMask {
    /// Drops lock modifiers so bindings match regardless of caps lock and num lock.
    #[must_use]
    pub fn clean(self) -> Self {
        self.intersection(
            Self::Shift | Self::Control | Self::Alt | Self::Mod3 | Self::Super | Self::Mod5,
        )
    }
}

impl Button {
    /// Converts an X11 button number (1 to 5).
    #[must_use]
    pub fn from_number(number: u32) -> Self {
        match number {
            1..=5 => Self::from_bits_retain(1 << (number - 1)),
            _ => Self::Zero,
        }
    }

    /// The X11 button number, 0 when no single button is set.
    #[must_use]
    pub fn number(self) -> u32 {
        match self.bits() {
            0 => 0,
            bits if bits.is_power_of_two() => bits.trailing_zeros() + 1,
            _ => 0,
        }
    }
}

#[must_use]
pub fn into_modmask(keys: &[String]) -> ModMask {
    let mut mask = ModMask::Zero;
    for s in keys {
        mask |= into_mod(s);
    }
    mask.clean()
}

#[must_use]
pub fn into_mod(key: &str) -> ModMask {
    match key {
        "Shift" => ModMask::Shift,
        "Control" => ModMask::Control,
        "Mod1" | "Alt" => ModMask::Alt,
        // NOTE: we are ignoring the state of Numlock
        // "Mod2" | "NumLock" => ModMask::NumLock,
        "Mod3" => ModMask::Mod3,
        "Mod4" | "Super" => ModMask::Super,
        "Mod5" => ModMask::Mod5,
        _ => ModMask::Zero,
    }
}

#[must_use]
pub fn into_button(name: &str) -> Button {
    match name {
        "Button1" => Button::Button1,
        "Button2" => Button::Button2,
        "Button3" => Button::Button3,
        "Button4" => Button::Button4,
        "Button5" => Button::Button5,
        _ => Button::Zero,
    }
}
