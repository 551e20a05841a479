//! `XWrap` getters.
use super::{MOUSEMASK, XlibError};
use crate::{XWrap, XlibWindowHandle};
use sdwm_core::SdwmError;
use sdwm_core::models::{BBox, Screen, WindowHandle};
use std::ffi::CString;
use std::os::raw::{c_int, c_long, c_uchar, c_uint, c_ulong};
use std::slice;
use x11_dl::xinerama::XineramaScreenInfo;
use x11_dl::xlib;

impl XWrap {
    /// Returns the child windows of the root, bottom to top.
    /// # Errors
    ///
    /// Will error if the window tree cannot be queried.
    // `XQueryTree`: https://tronche.com/gui/x/xlib/window-information/XQueryTree.html
    pub fn get_all_windows(&self) -> Result<Vec<xlib::Window>, XlibError> {
        unsafe {
            let mut root_return: xlib::Window = 0;
            let mut parent_return: xlib::Window = 0;
            let mut array: *mut xlib::Window = std::ptr::null_mut();
            let mut length: c_uint = 0;
            let status: xlib::Status = (self.xlib.XQueryTree)(
                self.display,
                self.root,
                &mut root_return,
                &mut parent_return,
                &mut array,
                &mut length,
            );
            if status == 0 {
                return Err(XlibError::FailedStatus);
            }
            if array.is_null() {
                return Ok(vec![]);
            }
            let windows = slice::from_raw_parts(array, length as usize).to_vec();
            (self.xlib.XFree)(array.cast());
            Ok(windows)
        }
    }

    /// Allocates a named color such as `"#444444"` in the default colormap.
    /// # Errors
    ///
    /// Will error if the name is not a color the server knows.
    // `XDefaultColormap`: https://tronche.com/gui/x/xlib/display/display-macros.html#DefaultColormap
    // `XAllocNamedColor`: https://tronche.com/gui/x/xlib/color/XAllocNamedColor.html
    pub fn get_color(&self, name: &str) -> Result<c_ulong, SdwmError> {
        let color_cstr =
            CString::new(name).map_err(|_| SdwmError::ColorAllocation(name.to_owned()))?;
        unsafe {
            let cmap: xlib::Colormap = (self.xlib.XDefaultColormap)(self.display, self.screen);
            let mut color: xlib::XColor = std::mem::zeroed();
            let mut exact: xlib::XColor = std::mem::zeroed();
            let status = (self.xlib.XAllocNamedColor)(
                self.display,
                cmap,
                color_cstr.as_ptr(),
                &mut color,
                &mut exact,
            );
            if status == 0 {
                return Err(SdwmError::ColorAllocation(name.to_owned()));
            }
            // Opaque alpha for visuals that carry one.
            Ok(color.pixel | 0xff << 24)
        }
    }

    /// Returns the current position of the cursor in root coordinates.
    /// # Errors
    ///
    /// Will error if the pointer is not on the root's screen.
    // `XQueryPointer`: https://tronche.com/gui/x/xlib/window-information/XQueryPointer.html
    pub fn get_cursor_point(&self) -> Result<(i32, i32), XlibError> {
        let mut root_return: xlib::Window = 0;
        let mut child_return: xlib::Window = 0;
        let mut root_x_return: c_int = 0;
        let mut root_y_return: c_int = 0;
        let mut win_x_return: c_int = 0;
        let mut win_y_return: c_int = 0;
        let mut mask_return: c_uint = 0;
        let success = unsafe {
            (self.xlib.XQueryPointer)(
                self.display,
                self.root,
                &mut root_return,
                &mut child_return,
                &mut root_x_return,
                &mut root_y_return,
                &mut win_x_return,
                &mut win_y_return,
                &mut mask_return,
            )
        };
        if success > 0 {
            return Ok((root_x_return, root_y_return));
        }
        Err(XlibError::RootWindowNotFound)
    }

    /// Returns the handle of the default root.
    #[must_use]
    pub const fn get_default_root_handle(&self) -> WindowHandle<XlibWindowHandle> {
        WindowHandle(XlibWindowHandle(self.root))
    }

    /// Returns the default root.
    #[must_use]
    pub const fn get_default_root(&self) -> xlib::Window {
        self.root
    }

    /// Blocks until the next pointer, expose or substructure redirect event.
    // `XMaskEvent`: https://tronche.com/gui/x/xlib/event-handling/manipulating-event-queue/XMaskEvent.html
    #[must_use]
    pub fn get_mask_event(&self) -> xlib::XEvent {
        unsafe {
            let mut event: xlib::XEvent = std::mem::zeroed();
            (self.xlib.XMaskEvent)(
                self.display,
                MOUSEMASK | xlib::SubstructureRedirectMask | xlib::ExposureMask,
                &mut event,
            );
            event
        }
    }

    /// Blocks until the next event. Returns `None` when the connection failed.
    // `XNextEvent`: https://tronche.com/gui/x/xlib/event-handling/manipulating-event-queue/XNextEvent.html
    #[must_use]
    pub fn get_next_event(&self) -> Option<xlib::XEvent> {
        unsafe {
            let mut event: xlib::XEvent = std::mem::zeroed();
            if (self.xlib.XNextEvent)(self.display, &mut event) != 0 {
                return None;
            }
            Some(event)
        }
    }

    /// Returns the outputs of the display, one per Xinerama screen. Without Xinerama the whole
    /// display is a single output.
    // `XineramaQueryScreens`: https://linux.die.net/man/3/xineramaqueryscreens
    #[must_use]
    pub fn get_screens(&self) -> Vec<Screen<XlibWindowHandle>> {
        let root = self.get_default_root_handle();
        if let Some(xinerama) = &self.xinerama {
            if unsafe { (xinerama.XineramaIsActive)(self.display) } > 0 {
                let mut screen_count = 0;
                let info_array_raw =
                    unsafe { (xinerama.XineramaQueryScreens)(self.display, &mut screen_count) };
                if !info_array_raw.is_null() {
                    let infos: &[XineramaScreenInfo] =
                        unsafe { slice::from_raw_parts(info_array_raw, screen_count as usize) };
                    let screens = infos
                        .iter()
                        .map(|i| {
                            let mut s: Screen<XlibWindowHandle> =
                                XineramaScreenInfoIntoScreen(i).into();
                            s.root = root;
                            s
                        })
                        .collect();
                    unsafe { (self.xlib.XFree)(info_array_raw.cast()) };
                    return screens;
                }
            }
        }
        let (width, height) = self.get_screen_size();
        let mut screen = Screen::new(
            BBox {
                x: 0,
                y: 0,
                width,
                height,
            },
            String::new(),
        );
        screen.root = root;
        vec![screen]
    }

    /// Returns the size of the whole display.
    // `XDisplayWidth`: https://tronche.com/gui/x/xlib/display/display-macros.html#DisplayWidth
    #[must_use]
    pub fn get_screen_size(&self) -> (i32, i32) {
        unsafe {
            (
                (self.xlib.XDisplayWidth)(self.display, self.screen),
                (self.xlib.XDisplayHeight)(self.display, self.screen),
            )
        }
    }

    /// Returns the transient parent of a window.
    // `XGetTransientForHint`: https://tronche.com/gui/x/xlib/ICC/client-to-window-manager/XGetTransientForHint.html
    #[must_use]
    pub fn get_transient_for(&self, window: xlib::Window) -> Option<xlib::Window> {
        unsafe {
            let mut transient: xlib::Window = 0;
            let status: c_int =
                (self.xlib.XGetTransientForHint)(self.display, window, &mut transient);
            if status > 0 { Some(transient) } else { None }
        }
    }

    /// Returns the attributes of a window.
    /// # Errors
    ///
    /// Will error if window status is 0 (no attributes).
    // `XGetWindowAttributes`: https://tronche.com/gui/x/xlib/window-information/XGetWindowAttributes.html
    pub fn get_window_attrs(
        &self,
        window: xlib::Window,
    ) -> Result<xlib::XWindowAttributes, XlibError> {
        let mut attrs: xlib::XWindowAttributes = unsafe { std::mem::zeroed() };
        let status = unsafe { (self.xlib.XGetWindowAttributes)(self.display, window, &mut attrs) };
        if status == 0 {
            return Err(XlibError::FailedStatus);
        }
        Ok(attrs)
    }

    /// Returns the `WM_STATE` of a window.
    // `XGetWindowProperty`: https://tronche.com/gui/x/xlib/window-information/XGetWindowProperty.html
    #[must_use]
    pub fn get_wm_state(&self, window: xlib::Window) -> Option<c_long> {
        let mut format_return: c_int = 0;
        let mut nitems_return: c_ulong = 0;
        let mut type_return: xlib::Atom = 0;
        let mut bytes_after_return: c_ulong = 0;
        let mut prop_return: *mut c_uchar = std::ptr::null_mut();
        unsafe {
            let status = (self.xlib.XGetWindowProperty)(
                self.display,
                window,
                self.wm_state,
                0,
                2,
                xlib::False,
                self.wm_state,
                &mut type_return,
                &mut format_return,
                &mut nitems_return,
                &mut bytes_after_return,
                &mut prop_return,
            );
            if status != i32::from(xlib::Success) || prop_return.is_null() {
                return None;
            }
            #[allow(clippy::cast_ptr_alignment)]
            let state = (nitems_return > 0).then(|| *prop_return.cast::<c_long>());
            (self.xlib.XFree)(prop_return.cast());
            state
        }
    }
}

struct XineramaScreenInfoIntoScreen<'a>(&'a XineramaScreenInfo);

impl From<XineramaScreenInfoIntoScreen<'_>> for Screen<XlibWindowHandle> {
    fn from(info: XineramaScreenInfoIntoScreen<'_>) -> Self {
        Screen::new(
            BBox {
                height: info.0.height.into(),
                width: info.0.width.into(),
                x: info.0.x_org.into(),
                y: info.0.y_org.into(),
            },
            format!("xinerama-{}", info.0.screen_number),
        )
    }
}
