use super::*;
use pretty_assertions::assert_eq;

fn pops(widths: &[usize]) -> Transition {
    Transition::Pop(widths.iter().copied().collect())
}

#[test]
fn starts_at_base() {
    let stack = IndentStack::new();
    assert_eq!(stack.levels(), &[0]);
    assert_eq!(stack.top(), 0);
    assert!(stack.is_base());
}

#[test]
fn deeper_line_pushes() {
    let mut stack = IndentStack::new();
    assert_eq!(stack.transition(4), Ok(Transition::Push(4)));
    assert_eq!(stack.transition(4), Ok(Transition::Stay));
    assert_eq!(stack.transition(8), Ok(Transition::Push(8)));
    assert_eq!(stack.levels(), &[0, 4, 8]);
}

#[test]
fn shallower_line_pops_to_matching_level() {
    let mut stack = IndentStack::new();
    for width in [2, 6, 10] {
        assert_eq!(stack.transition(width), Ok(Transition::Push(width)));
    }
    assert_eq!(stack.transition(2), Ok(pops(&[6, 2])));
    assert_eq!(stack.levels(), &[0, 2]);
    assert_eq!(stack.transition(0), Ok(pops(&[0])));
    assert!(stack.is_base());
}

#[test]
fn misaligned_dedent_is_rejected() {
    let mut stack = IndentStack::new();
    assert_eq!(stack.transition(4), Ok(Transition::Push(4)));
    assert_eq!(stack.transition(8), Ok(Transition::Push(8)));
    assert_eq!(
        stack.transition(6),
        Err(IndentError::Misaligned {
            width: 6,
            nearest: 4
        })
    );
    assert_eq!(stack.levels(), &[0, 4, 8]);
}

#[test]
fn unwind_returns_to_base() {
    let mut stack = IndentStack::new();
    assert_eq!(stack.unwind(), Ok(Pops::new()));
    assert_eq!(stack.transition(3), Ok(Transition::Push(3)));
    assert_eq!(stack.transition(7), Ok(Transition::Push(7)));
    let popped = stack.unwind();
    assert_eq!(popped.as_deref(), Ok(&[3, 0][..]));
    assert!(stack.is_base());
}

#[test]
fn measure_code_lines() {
    assert_eq!(measure("x = 1"), LineIndent::Code { width: 0 });
    assert_eq!(measure("    return x\n"), LineIndent::Code { width: 4 });
}

#[test]
fn measure_blank_and_comment_lines() {
    assert_eq!(measure(""), LineIndent::Blank { len: 0 });
    assert_eq!(measure("   \n"), LineIndent::Blank { len: 3 });
    assert_eq!(measure("  \r\nx"), LineIndent::Blank { len: 2 });
    assert_eq!(measure("      # note\n"), LineIndent::Blank { len: 6 });
    assert_eq!(measure("\t  "), LineIndent::Blank { len: 3 });
}

#[test]
fn measure_counts_leading_spaces_only() {
    assert_eq!(measure("\tx"), LineIndent::Code { width: 0 });
    assert_eq!(measure("  \t y"), LineIndent::Code { width: 2 });
}

#[test]
fn measure_block_comment_lines() {
    assert_eq!(measure("    /* c */\ny"), LineIndent::Blank { len: 4 });
    assert_eq!(measure("  /* a */ /* b */ # c\n"), LineIndent::Blank { len: 2 });
    assert_eq!(measure("/* c */"), LineIndent::Blank { len: 0 });
    assert_eq!(measure("  /* c */ x"), LineIndent::Code { width: 2 });
    assert_eq!(measure("  /* spans\n lines */\n"), LineIndent::Code { width: 2 });
    assert_eq!(measure("  /* open"), LineIndent::Code { width: 2 });
}
