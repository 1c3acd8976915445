// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use yare::parameterized;

#[parameterized(
    either_failed_wins_over_canceled = { OrderStatus::Failed, OrderStatus::Canceled, OrderStatus::Failed },
    either_failed_wins_over_completed = { OrderStatus::Completed, OrderStatus::Failed, OrderStatus::Failed },
    either_canceled_wins_over_completed = { OrderStatus::Canceled, OrderStatus::Completed, OrderStatus::Canceled },
    both_completed = { OrderStatus::Completed, OrderStatus::Completed, OrderStatus::Completed },
    either_in_progress = { OrderStatus::Queuing, OrderStatus::InProgress, OrderStatus::InProgress },
    both_queuing = { OrderStatus::Queuing, OrderStatus::Queuing, OrderStatus::Queuing },
)]
fn derives_per_precedence_table(pickup: OrderStatus, delivery: OrderStatus, expected: OrderStatus) {
    assert_eq!(derive_request_status(pickup, delivery), expected);
    // Order of the two jobs must not matter for the symmetric cases tested here.
    assert_eq!(derive_request_status(delivery, pickup), expected);
}

#[test]
fn terminal_set_matches_spec() {
    assert!(OrderStatus::Failed.is_terminal());
    assert!(OrderStatus::Canceled.is_terminal());
    assert!(OrderStatus::Completed.is_terminal());
    assert!(!OrderStatus::Queuing.is_terminal());
    assert!(!OrderStatus::InProgress.is_terminal());
}

#[test]
fn code_round_trips() {
    for code in 0..=4 {
        assert_eq!(OrderStatus::from_code(code).unwrap().code(), code);
    }
}
