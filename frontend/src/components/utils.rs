use gloo_timers::callback::Timeout;
use std::cell::RefCell;
use std::rc::Rc;
use yew::prelude::*;

/// Fixed ten-entry palette for the digit classes; lookups cycle when the
/// service returns more entries than colors.
pub const CLASS_PALETTE: [&str; 10] = [
    "#4e79a7", "#f28e2b", "#e15759", "#76b7b2", "#59a14f", "#edc948", "#b07aa1", "#ff9da7",
    "#9c755f", "#bab0ac",
];

pub fn class_color(index: usize) -> &'static str {
    CLASS_PALETTE[index % CLASS_PALETTE.len()]
}

/// Viewport coordinates translated into the surface's local frame.
pub fn surface_local(client_x: f64, client_y: f64, origin_x: f64, origin_y: f64) -> (f64, f64) {
    (client_x - origin_x, client_y - origin_y)
}

// Debounce function to limit button events
pub fn debounce<F>(duration: i32, callback: F) -> Callback<MouseEvent>
where
    F: Fn() + Clone + 'static,
{
    let timeout = Rc::new(RefCell::new(None::<Timeout>));
    let timeout_clone = Rc::clone(&timeout);

    Callback::from(move |_| {
        let mut timeout_ref = timeout_clone.borrow_mut();

        if let Some(old_timeout) = timeout_ref.take() {
            old_timeout.cancel();
        }

        let inner_callback = callback.clone();
        let new_timeout = Timeout::new(duration as u32, move || {
            inner_callback();
        });

        *timeout_ref = Some(new_timeout);
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn palette_has_ten_distinct_entries() {
        let mut colors: Vec<&str> = CLASS_PALETTE.to_vec();
        colors.sort();
        colors.dedup();
        assert_eq!(colors.len(), 10);
    }

    #[test]
    fn palette_cycles_past_ten() {
        assert_eq!(class_color(10), class_color(0));
        assert_eq!(class_color(23), class_color(3));
    }

    #[test]
    fn surface_local_subtracts_the_origin() {
        assert_eq!(surface_local(150.0, 240.0, 100.0, 200.0), (50.0, 40.0));
    }

    #[test]
    fn surface_local_tolerates_points_outside_the_surface() {
        let (x, y) = surface_local(90.0, 180.0, 100.0, 200.0);
        assert_eq!((x, y), (-10.0, -20.0));
    }
}
