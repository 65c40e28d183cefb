use anyhow::Result;

use super::{OverflowError, Stack, StackBuilder, SwapError};

#[test]
fn init_empty() {
    let stack = Stack::<u32>::new();

    assert!(stack.is_empty());
    assert_eq!(stack.len(), 0);
    assert_eq!(stack.max_size(), None);
    assert!(!stack.is_strict());
}

#[test]
fn init_with_values() {
    let stack = Stack::from([1, 2, 3]);

    assert_eq!(stack.len(), 3);
    assert_eq!(stack.items(), &[1, 2, 3]);
}

#[test]
fn init_with_single_value() {
    let stack = Stack::from([1]);

    assert_eq!(stack.len(), 1);
    assert_eq!(stack.peek(), Some(&1));
}

#[test]
fn init_with_options() -> Result<()> {
    let stack = StackBuilder::new()
        .size(3)
        .strict(true)
        .build_from::<u32, _>([])?;

    assert!(stack.is_empty());
    assert_eq!(stack.max_size(), Some(3));
    assert!(stack.is_strict());
    Ok(())
}

#[test]
fn init_strict_overflow() {
    let result = StackBuilder::new().size(2).strict(true).build_from([1, 2, 3]);

    assert_eq!(result.unwrap_err(), OverflowError::Init { size: 2, count: 3 });
}

#[test]
fn init_truncates_earliest_supplied() -> Result<()> {
    let stack = StackBuilder::new().size(2).build_from([1, 2, 3, 4])?;

    assert_eq!(stack.items(), &[3, 4]);
    Ok(())
}

#[test]
fn push_unbounded() -> Result<()> {
    let mut stack = Stack::new();

    stack.push(1)?;

    assert_eq!(stack.len(), 1);
    assert_eq!(stack.peek(), Some(&1));
    Ok(())
}

#[test]
fn push_evicts_oldest() -> Result<()> {
    let mut stack = Stack::bounded(1);

    stack.push(1)?;
    stack.push(2)?;

    assert_eq!(stack.items(), &[2]);
    Ok(())
}

#[test]
fn push_strict_overflow() -> Result<()> {
    let mut stack = StackBuilder::new().size(1).strict(true).build();

    stack.push(1)?;

    assert_eq!(stack.push(2).unwrap_err(), OverflowError::Push { size: 1 });
    // Failed push leaves the stack untouched.
    assert_eq!(stack.items(), &[1]);
    Ok(())
}

#[test]
fn push_keeps_last_n() -> Result<()> {
    let mut stack = Stack::bounded(3);

    for n in 0..10 {
        stack.push(n)?;
    }

    assert_eq!(stack.items(), &[7, 8, 9]);
    Ok(())
}

#[test]
fn push_zero_bound() -> Result<()> {
    let mut stack = Stack::bounded(0);

    stack.push(1)?;

    assert!(stack.is_empty());

    let mut strict = StackBuilder::new().size(0).strict(true).build();

    assert_eq!(strict.push(1).unwrap_err(), OverflowError::Push { size: 0 });
    Ok(())
}

#[test]
fn push_then_pop_returns_item() -> Result<()> {
    let mut stack = Stack::from([1, 2]);

    stack.push(3)?;

    assert_eq!(stack.pop(), Some(3));
    assert_eq!(stack.items(), &[1, 2]);
    Ok(())
}

#[test]
fn push_then_pop_after_eviction() -> Result<()> {
    let mut stack = StackBuilder::new().size(2).build_from([1, 2])?;

    stack.push(3)?;

    assert_eq!(stack.pop(), Some(3));
    // The eviction is not undone by the pop.
    assert_eq!(stack.items(), &[2]);
    Ok(())
}

#[test]
fn pop() {
    let mut stack = Stack::from([1, 2]);

    assert_eq!(stack.pop(), Some(2));
    assert_eq!(stack.len(), 1);
    assert_eq!(stack.pop(), Some(1));
    assert_eq!(stack.len(), 0);
    assert_eq!(stack.pop(), None);
}

#[test]
fn peek_does_not_mutate() {
    let stack = Stack::from([1]);

    assert_eq!(stack.peek(), Some(&1));
    assert_eq!(stack.peek(), Some(&1));
    assert_eq!(stack.items(), &[1]);

    let empty = Stack::<u32>::new();

    assert_eq!(empty.peek(), None);
}

#[test]
fn is_full() -> Result<()> {
    let stack = StackBuilder::new().size(2).build_from([1, 2])?;

    assert!(stack.is_full());

    let unbounded = Stack::from([1, 2]);

    assert!(!unbounded.is_full());
    Ok(())
}

#[test]
fn swap_values() -> Result<()> {
    let mut stack = Stack::from([1, 2]);

    stack.swap(&1, &2)?;

    assert_eq!(stack.items(), &[2, 1]);
    Ok(())
}

#[test]
fn swap_first_occurrences() -> Result<()> {
    let mut stack = Stack::from([1, 2, 1, 2]);

    stack.swap(&1, &2)?;

    assert_eq!(stack.items(), &[2, 1, 1, 2]);
    Ok(())
}

#[test]
fn swap_missing_values() {
    let mut stack = Stack::from([1, 2]);

    assert_eq!(stack.swap(&1, &3).unwrap_err(), SwapError::ItemsNotFound);
    assert_eq!(stack.swap(&3, &1).unwrap_err(), SwapError::ItemsNotFound);
    // No partial mutation.
    assert_eq!(stack.items(), &[1, 2]);
}

#[test]
fn swap_by_index() -> Result<()> {
    let mut stack = Stack::from([1, 2]);

    stack.swap_by_index(0, 1)?;

    assert_eq!(stack.items(), &[2, 1]);
    Ok(())
}

#[test]
fn swap_by_index_is_its_own_inverse() -> Result<()> {
    let mut stack = Stack::from([1, 2, 3, 4]);

    stack.swap_by_index(1, 3)?;
    stack.swap_by_index(1, 3)?;

    assert_eq!(stack.items(), &[1, 2, 3, 4]);
    Ok(())
}

#[test]
fn swap_by_index_out_of_range() {
    let mut stack = Stack::from([1, 2]);

    assert_eq!(
        stack.swap_by_index(0, 2).unwrap_err(),
        SwapError::InvalidIndexes {
            index1: 0,
            index2: 2,
            len: 2
        }
    );
    assert_eq!(
        stack.swap_by_index(2, 0).unwrap_err(),
        SwapError::InvalidIndexes {
            index1: 2,
            index2: 0,
            len: 2
        }
    );
    assert_eq!(stack.items(), &[1, 2]);
}

#[test]
fn iteration_is_bottom_to_top() {
    let stack = Stack::from([1, 2]);

    assert_eq!(stack.iter().copied().collect::<Vec<_>>(), [1, 2]);
    assert_eq!(stack.into_iter().collect::<Vec<_>>(), [1, 2]);
}

#[test]
fn iteration_is_restartable() {
    let stack = Stack::from([1, 2, 3]);

    assert_eq!(stack.iter().count(), 3);
    assert_eq!(stack.iter().count(), 3);
}

#[test]
fn popping_is_top_to_bottom() {
    let mut stack = Stack::from([1, 2, 3]);
    let mut values = Vec::new();

    while let Some(value) = stack.pop() {
        values.push(value);
    }

    assert_eq!(values, [3, 2, 1]);
}

#[test]
fn error_messages() {
    assert_eq!(
        OverflowError::Init { size: 2, count: 3 }.to_string(),
        "Stack size is 2, attempt to initialize stack with 3 items"
    );
    assert_eq!(
        OverflowError::Push { size: 2 }.to_string(),
        "Stack size is 2, attempt to push item to full stack"
    );
    assert_eq!(SwapError::ItemsNotFound.to_string(), "Items not found");
    assert_eq!(
        SwapError::InvalidIndexes {
            index1: 0,
            index2: 2,
            len: 2
        }
        .to_string(),
        "Invalid indexes 0 and 2 for stack of length 2"
    );
}

#[test]
fn composite_items_swap_by_equality() -> Result<()> {
    #[derive(Debug, PartialEq)]
    struct Item(&'static str);

    let mut stack = Stack::from([Item("a"), Item("b")]);

    stack.swap(&Item("a"), &Item("b"))?;

    assert_eq!(stack.items(), &[Item("b"), Item("a")]);
    Ok(())
}
