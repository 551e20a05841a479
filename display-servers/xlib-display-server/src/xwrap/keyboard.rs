//! Xlib calls related to a keyboard.
use crate::XWrap;
use sdwm_core::utils::modmask_lookup::ModMask;
use sdwm_core::utils::xkeysym_lookup::XKeysym;
use std::os::raw::{c_int, c_uint, c_ulong};
use std::slice;
use x11_dl::{keysym, xlib};

impl XWrap {
    /// Finds which modifier num lock is mapped to.
    // `XGetModifierMapping`: https://tronche.com/gui/x/xlib/input/XGetModifierMapping.html
    pub fn update_numlock_mask(&mut self) {
        self.numlock_mask = 0;
        unsafe {
            let modmap = (self.xlib.XGetModifierMapping)(self.display);
            if modmap.is_null() {
                return;
            }
            let per_modifier = (*modmap).max_keypermod as usize;
            let keycodes = slice::from_raw_parts((*modmap).modifiermap, 8 * per_modifier);
            let numlock =
                (self.xlib.XKeysymToKeycode)(self.display, c_ulong::from(keysym::XK_Num_Lock));
            for (i, chunk) in keycodes.chunks(per_modifier.max(1)).enumerate() {
                if numlock != 0 && chunk.contains(&numlock) {
                    self.numlock_mask = 1 << i;
                }
            }
            (self.xlib.XFreeModifiermap)(modmap);
        }
    }

    /// The modifier combined with every combination of caps lock and num lock.
    pub(crate) fn lock_variants(&self, modifiers: u32) -> [u32; 4] {
        [
            modifiers,
            modifiers | xlib::LockMask,
            modifiers | self.numlock_mask,
            modifiers | self.numlock_mask | xlib::LockMask,
        ]
    }

    /// Drops caps lock and num lock from an event state.
    #[must_use]
    pub fn clean_mask(&self, state: c_uint) -> ModMask {
        let state = state & !(self.numlock_mask | xlib::LockMask);
        ModMask::from_bits_truncate(state as u16)
    }

    /// Grabs every key binding on the root, replacing earlier grabs.
    // `XGrabKey`: https://tronche.com/gui/x/xlib/input/XGrabKey.html
    // `XGetKeyboardMapping`: https://tronche.com/gui/x/xlib/input/XGetKeyboardMapping.html
    pub fn grab_keys(&mut self) {
        self.update_numlock_mask();
        self.ungrab_keys();
        let mut start: c_int = 0;
        let mut end: c_int = 0;
        let mut per_keycode: c_int = 0;
        unsafe {
            (self.xlib.XDisplayKeycodes)(self.display, &mut start, &mut end);
            let syms = (self.xlib.XGetKeyboardMapping)(
                self.display,
                start as u8,
                end - start + 1,
                &mut per_keycode,
            );
            if syms.is_null() {
                tracing::warn!("Unable to read the keyboard mapping");
                return;
            }
            let count = ((end - start + 1) * per_keycode) as usize;
            let mapping = slice::from_raw_parts(syms, count);
            for keycode in start..=end {
                let sym = mapping[((keycode - start) * per_keycode) as usize];
                for (modifier, key) in &self.keys {
                    if sym != c_ulong::from(*key) {
                        continue;
                    }
                    for m in self.lock_variants(u32::from(modifier.bits())) {
                        (self.xlib.XGrabKey)(
                            self.display,
                            keycode,
                            m,
                            self.root,
                            xlib::True,
                            xlib::GrabModeAsync,
                            xlib::GrabModeAsync,
                        );
                    }
                }
            }
            (self.xlib.XFree)(syms.cast());
        }
    }

    // `XUngrabKey`: https://tronche.com/gui/x/xlib/input/XUngrabKey.html
    pub fn ungrab_keys(&self) {
        unsafe {
            (self.xlib.XUngrabKey)(
                self.display,
                xlib::AnyKey as c_int,
                xlib::AnyModifier,
                self.root,
            );
        }
    }

    /// The keysym in the first column of a keycode.
    // `XKeycodeToKeysym`: https://linux.die.net/man/3/xkeycodetokeysym
    #[must_use]
    pub fn keycode_to_keysym(&self, keycode: c_uint) -> XKeysym {
        let sym = unsafe { (self.xlib.XKeycodeToKeysym)(self.display, keycode as u8, 0) };
        sym as XKeysym
    }

    /// Tells Xlib the keyboard mapping changed.
    // `XRefreshKeyboardMapping`: https://tronche.com/gui/x/xlib/utilities/keyboard/XRefreshKeyboardMapping.html
    pub fn refresh_keyboard_mapping(&self, event: &mut xlib::XMappingEvent) {
        unsafe { (self.xlib.XRefreshKeyboardMapping)(event) };
    }
}
