//! Key names to X11 keysyms.
use x11_dl::keysym;

pub type XKeysym = u32;

/// Resolves an X11 keysym name such as `"Return"` or `"comma"`.
#[must_use]
pub fn into_keysym(key: &str) -> Option<XKeysym> {
    let sym = match key {
        "a" => keysym::XK_a,
        "b" => keysym::XK_b,
        "c" => keysym::XK_c,
        "d" => keysym::XK_d,
        "e" => keysym::XK_e,
        "f" => keysym::XK_f,
        "g" => keysym::XK_g,
        "h" => keysym::XK_h,
        "i" => keysym::XK_i,
        "j" => keysym::XK_j,
        "k" => keysym::XK_k,
        "l" => keysym::XK_l,
        "m" => keysym::XK_m,
        "n" => keysym::XK_n,
        "o" => keysym::XK_o,
        "p" => keysym::XK_p,
        "q" => keysym::XK_q,
        "r" => keysym::XK_r,
        "s" => keysym::XK_s,
        "t" => keysym::XK_t,
        "u" => keysym::XK_u,
        "v" => keysym::XK_v,
        "w" => keysym::XK_w,
        "x" => keysym::XK_x,
        "y" => keysym::XK_y,
        "z" => keysym::XK_z,
        "0" => keysym::XK_0,
        "1" => keysym::XK_1,
        "2" => keysym::XK_2,
        "3" => keysym::XK_3,
        "4" => keysym::XK_4,
        "5" => keysym::XK_5,
        "6" => keysym::XK_6,
        "7" => keysym::XK_7,
        "8" => keysym::XK_8,
        "9" => keysym::XK_9,
        "F1" => keysym::XK_F1,
        "F2" => keysym::XK_F2,
        "F3" => keysym::XK_F3,
        "F4" => keysym::XK_F4,
        "F5" => keysym::XK_F5,
        "F6" => keysym::XK_F6,
        "F7" => keysym::XK_F7,
        "F8" => keysym::XK_F8,
        "F9" => keysym::XK_F9,
        "F10" => keysym::XK_F10,
        "F11" => keysym::XK_F11,
        "F12" => keysym::XK_F12,
        "Return" => keysym::XK_Return,
        "Tab" => keysym::XK_Tab,
        "space" => keysym::XK_space,
        "comma" => keysym::XK_comma,
        "period" => keysym::XK_period,
        "Escape" => keysym::XK_Escape,
        "BackSpace" => keysym::XK_BackSpace,
        "Delete" => keysym::XK_Delete,
        "Home" => keysym::XK_Home,
        "End" => keysym::XK_End,
        "Left" => keysym::XK_Left,
        "Right" => keysym::XK_Right,
        "Up" => keysym::XK_Up,
        "Down" => keysym::XK_Down,
        "Prior" => keysym::XK_Prior,
        "Next" => keysym::XK_Next,
        "Insert" => keysym::XK_Insert,
        "minus" => keysym::XK_minus,
        "equal" => keysym::XK_equal,
        "slash" => keysym::XK_slash,
        "backslash" => keysym::XK_backslash,
        "semicolon" => keysym::XK_semicolon,
        "apostrophe" => keysym::XK_apostrophe,
        "grave" => keysym::XK_grave,
        "bracketleft" => keysym::XK_bracketleft,
        "bracketright" => keysym::XK_bracketright,
        "Print" => keysym::XK_Print,
        _ => return None,
    };
    Some(sym)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_names_resolve() {
        assert_eq!(into_keysym("Return"), Some(keysym::XK_Return));
        assert_eq!(into_keysym("j"), Some(keysym::XK_j));
        assert_eq!(into_keysym("9"), Some(keysym::XK_9));
    }

    #[test]
    fn unknown_names_do_not_resolve() {
        assert_eq!(into_keysym("NotAKey"), None);
        assert_eq!(into_keysym(""), None);
    }
}
