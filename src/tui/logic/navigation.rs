pub fn navigate_up(selected: &mut usize) {
    *selected = selected.saturating_sub(1);
}

pub fn navigate_down(selected: &mut usize, max_items: usize) {
    let max = max_items.saturating_sub(1);
    if *selected < max {
        *selected += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_navigation_stays_in_bounds() {
        let mut selected = 0;
        navigate_up(&mut selected);
        assert_eq!(selected, 0);
        navigate_down(&mut selected, 2);
        navigate_down(&mut selected, 2);
        assert_eq!(selected, 1);
        navigate_down(&mut selected, 0);
        assert_eq!(selected, 1);
    }
}
