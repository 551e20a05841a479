use crate::XlibWindowHandle;

use super::{DisplayEvent, XWrap};
use sdwm_core::models::{ConfigureRequest, WindowHandle};
use sdwm_core::utils::modmask_lookup::Button;
use std::os::raw::c_ulong;
use x11_dl::xlib;

pub struct XEvent<'a>(pub &'a XWrap, pub xlib::XEvent);

impl From<XEvent<'_>> for Option<DisplayEvent<XlibWindowHandle>> {
    fn from(x_event: XEvent) -> Self {
        let raw_event = x_event.1;
        match raw_event.get_type() {
            // New window asks to be mapped.
            xlib::MapRequest => from_map_request(&x_event),
            // Window is unmapped.
            xlib::UnmapNotify => from_unmap_event(&x_event),
            // Window is destroyed.
            xlib::DestroyNotify => from_destroy_notify(&x_event),
            // Window is taking focus.
            xlib::FocusIn => from_focus_in(&x_event),
            // Window configure request.
            xlib::ConfigureRequest => Some(from_configure_request(&x_event)),
            // The root changed size.
            xlib::ConfigureNotify => from_configure_notify(&x_event),
            // Mouse entered notify.
            xlib::EnterNotify => from_enter_notify(&x_event),
            // Mouse motion notify.
            xlib::MotionNotify => Some(from_motion_notify(&x_event)),
            // Mouse button pressed.
            xlib::ButtonPress => Some(from_button_press(&x_event)),
            // Mouse button released.
            xlib::ButtonRelease => Some(DisplayEvent::ButtonRelease),
            xlib::KeyPress => Some(from_key_press(&x_event)),
            xlib::MappingNotify => from_mapping_notify(&x_event),
            xlib::Expose => from_expose(&x_event),
            _other => None,
        }
    }
}

const fn handle(window: xlib::Window) -> WindowHandle<XlibWindowHandle> {
    WindowHandle(XlibWindowHandle(window))
}

fn from_map_request(x_event: &XEvent) -> Option<DisplayEvent<XlibWindowHandle>> {
    let event = xlib::XMapRequestEvent::from(x_event.1);
    x_event.0.setup_window(event.window).map(DisplayEvent::WindowCreate)
}

fn from_unmap_event(x_event: &XEvent) -> Option<DisplayEvent<XlibWindowHandle>> {
    let event = xlib::XUnmapEvent::from(x_event.1);
    // Synthetic unmaps announce a withdrawal the client still has to perform.
    if event.send_event != xlib::False {
        return None;
    }
    Some(DisplayEvent::WindowUnmap(handle(event.window)))
}

fn from_destroy_notify(x_event: &XEvent) -> Option<DisplayEvent<XlibWindowHandle>> {
    let event = xlib::XDestroyWindowEvent::from(x_event.1);
    Some(DisplayEvent::WindowDestroy(handle(event.window)))
}

fn from_focus_in(x_event: &XEvent) -> Option<DisplayEvent<XlibWindowHandle>> {
    let event = xlib::XFocusChangeEvent::from(x_event.1);
    Some(DisplayEvent::FocusIn(handle(event.window)))
}

fn from_configure_request(x_event: &XEvent) -> DisplayEvent<XlibWindowHandle> {
    let event = xlib::XConfigureRequestEvent::from(x_event.1);
    let has = |flag: u16| event.value_mask & c_ulong::from(flag) != 0;
    let mut request = ConfigureRequest::new(handle(event.window));
    request.x = has(xlib::CWX).then_some(event.x);
    request.y = has(xlib::CWY).then_some(event.y);
    request.w = has(xlib::CWWidth).then_some(event.width);
    request.h = has(xlib::CWHeight).then_some(event.height);
    request.border = has(xlib::CWBorderWidth).then_some(event.border_width);
    request.sibling = has(xlib::CWSibling).then_some(handle(event.above));
    request.stack_mode = has(xlib::CWStackMode).then_some(event.detail);
    DisplayEvent::ConfigureRequest(request)
}

fn from_configure_notify(x_event: &XEvent) -> Option<DisplayEvent<XlibWindowHandle>> {
    let event = xlib::XConfigureEvent::from(x_event.1);
    if event.window != x_event.0.get_default_root() {
        return None;
    }
    Some(DisplayEvent::ScreenResize(event.width, event.height))
}

fn from_enter_notify(x_event: &XEvent) -> Option<DisplayEvent<XlibWindowHandle>> {
    let event = xlib::XCrossingEvent::from(x_event.1);
    if (event.mode != xlib::NotifyNormal || event.detail == xlib::NotifyInferior)
        && event.window != x_event.0.get_default_root()
    {
        return None;
    }
    Some(DisplayEvent::PointerEnter(
        handle(event.window),
        event.x_root,
        event.y_root,
    ))
}

fn from_motion_notify(x_event: &XEvent) -> DisplayEvent<XlibWindowHandle> {
    let event = xlib::XMotionEvent::from(x_event.1);
    DisplayEvent::Motion(
        handle(event.window),
        event.x_root,
        event.y_root,
        u64::from(event.time),
    )
}

fn from_button_press(x_event: &XEvent) -> DisplayEvent<XlibWindowHandle> {
    let event = xlib::XButtonPressedEvent::from(x_event.1);
    DisplayEvent::MouseCombo(
        x_event.0.clean_mask(event.state),
        Button::from_number(event.button),
        handle(event.window),
        event.x_root,
        event.y_root,
    )
}

fn from_key_press(x_event: &XEvent) -> DisplayEvent<XlibWindowHandle> {
    let event = xlib::XKeyEvent::from(x_event.1);
    DisplayEvent::KeyCombo(
        x_event.0.clean_mask(event.state),
        x_event.0.keycode_to_keysym(event.keycode),
    )
}

fn from_mapping_notify(x_event: &XEvent) -> Option<DisplayEvent<XlibWindowHandle>> {
    let mut event = xlib::XMappingEvent::from(x_event.1);
    x_event.0.refresh_keyboard_mapping(&mut event);
    (event.request == xlib::MappingKeyboard).then_some(DisplayEvent::KeyboardMappingChanged)
}

fn from_expose(x_event: &XEvent) -> Option<DisplayEvent<XlibWindowHandle>> {
    let event = xlib::XExposeEvent::from(x_event.1);
    (event.count == 0).then(|| DisplayEvent::Expose(handle(event.window)))
}
