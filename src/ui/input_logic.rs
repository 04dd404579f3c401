use super::Direction;

/// Move selection cursor one item forward, wrapping to the first item.
pub fn select_next(selected: usize, item_count: usize) -> usize {
    if selected + 1 < item_count {
        selected + 1
    } else {
        0
    }
}

/// Move selection cursor one item back, wrapping to the last item.
pub fn select_prev(selected: usize, item_count: usize) -> usize {
    match selected {
        _ if item_count == 0 => 0,
        0 => item_count - 1,
        n if n >= item_count => item_count - 1,
        n => n - 1,
    }
}

/// Apply one encoder detent to a cursor over `item_count` items.
pub fn step(selected: usize, item_count: usize, direction: Direction) -> usize {
    match direction {
        Direction::Clockwise => select_next(selected, item_count),
        Direction::CounterClockwise => select_prev(selected, item_count),
    }
}

/// Pull a cursor back into range after its list shrank.
pub fn clamp_wrap(selected: usize, item_count: usize) -> usize {
    if selected < item_count {
        selected
    } else {
        0
    }
}
