use crate::models::Xyhw;

/// Master column on the left, stack column on the right.
///
/// Each window in a column gets the remaining height divided by the remaining windows, so the
/// last window of a column absorbs the rounding slack.
pub fn update(work: &Xyhw, master_fraction: f32, master_count: i32, count: usize) -> Vec<Xyhw> {
    let master_count = master_count.max(0) as usize;
    let master_width = if count > master_count {
        if master_count > 0 {
            (work.w() as f32 * master_fraction) as i32
        } else {
            0
        }
    } else {
        work.w()
    };
    let masters = count.min(master_count);

    let mut slots = Vec::with_capacity(count);
    let mut master_y = 0;
    let mut stack_y = 0;
    for i in 0..count {
        if i < masters {
            let h = (work.h() - master_y) / (masters - i) as i32;
            slots.push(Xyhw::new(work.x(), work.y() + master_y, master_width, h));
            if master_y + h < work.h() {
                master_y += h;
            }
        } else {
            let h = (work.h() - stack_y) / (count - i) as i32;
            slots.push(Xyhw::new(
                work.x() + master_width,
                work.y() + stack_y,
                work.w() - master_width,
                h,
            ));
            if stack_y + h < work.h() {
                stack_y += h;
            }
        }
    }
    slots
}

#[cfg(test)]
mod tests {
    use super::*;

    const WORK: Xyhw = Xyhw::new(0, 0, 1920, 1080);

    #[test]
    fn three_windows_split_into_master_and_stack() {
        let slots = update(&WORK, 0.55, 1, 3);
        assert_eq!(
            slots,
            vec![
                Xyhw::new(0, 0, 1056, 1080),
                Xyhw::new(1056, 0, 864, 540),
                Xyhw::new(1056, 540, 864, 540),
            ]
        );
    }

    #[test]
    fn last_window_of_a_column_absorbs_rounding() {
        let work = Xyhw::new(0, 0, 100, 100);
        let slots = update(&work, 0.5, 0, 3);
        let heights: Vec<i32> = slots.iter().map(Xyhw::h).collect();
        assert_eq!(heights, vec![33, 33, 34]);
    }

    #[test]
    fn tile_partitions_the_work_area() {
        let work = Xyhw::new(100, 50, 1277, 1003);
        for count in [0_usize, 1, 2, 5] {
            for master_count in [0, 1, 2] {
                let slots = update(&work, 0.55, master_count, count);
                assert_eq!(slots.len(), count);

                let covered: i32 = slots.iter().map(Xyhw::area).sum();
                if count > 0 {
                    assert_eq!(covered, work.area(), "n={count} master={master_count}");
                }
                for (i, a) in slots.iter().enumerate() {
                    assert!(a.w() > 0 && a.h() > 0);
                    assert_eq!(a.intersection_area(&work), a.area());
                    for b in slots.iter().skip(i + 1) {
                        assert!(!a.overlaps(b), "n={count} master={master_count}");
                    }
                }

                let in_master = if count > master_count as usize {
                    slots
                        .iter()
                        .filter(|s| s.x() == work.x() && s.w() < work.w())
                        .count()
                } else {
                    slots
                        .iter()
                        .filter(|s| s.x() == work.x() && s.w() == work.w())
                        .count()
                };
                assert_eq!(in_master, count.min(master_count as usize));
            }
        }
    }
}
