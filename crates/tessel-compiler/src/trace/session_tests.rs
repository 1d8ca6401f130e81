use super::*;
use crate::ast::NodeKind;
use crate::codegen::generate;
use crate::program::Program;
use crate::test_utils::left_deep_sum;
use crate::value::Float;

#[test]
fn new_session_has_program_root() {
    let session = Session::new();

    assert_eq!(session.depth(), 1);
    assert_eq!(session.current_block(), session.root());
    assert_eq!(session.current_kind(), NodeKind::Program);
    assert_eq!(session.symbol_count(), 0);
}

#[test]
fn enter_and_exit_are_balanced() {
    let mut s = Session::new();
    let main = s.enter_block(NodeKind::Main).unwrap();
    let block = s.enter_block(NodeKind::Block).unwrap();
    assert_eq!(s.depth(), 3);
    assert_eq!(s.current_block(), block);

    assert_eq!(s.exit_block().unwrap(), block);
    assert_eq!(s.exit_block().unwrap(), main);
    assert_eq!(s.exit_block().unwrap_err(), TraceError::UnbalancedExit);

    let source = s.finish().unwrap();
    assert_eq!(source.ast().children(source.root()), &[main]);
}

#[test]
fn finish_rejects_open_blocks() {
    let mut s = Session::new();
    s.enter_block(NodeKind::Main).unwrap();

    assert_eq!(
        s.finish().unwrap_err(),
        TraceError::UnclosedBlock {
            kind: NodeKind::Main,
            depth: 2
        }
    );
}

#[test]
fn sections_are_unique_and_top_level() {
    let mut s = Session::new();
    s.main(|_| Ok(())).unwrap();
    assert_eq!(
        s.main(|_| Ok(())).unwrap_err(),
        TraceError::DuplicateSection(NodeKind::Main)
    );

    let mut s = Session::new();
    let err = s
        .main(|s| s.const_data(|_| Ok(())))
        .unwrap_err();
    assert_eq!(
        err,
        TraceError::MisplacedSection {
            kind: NodeKind::ConstData,
            parent: NodeKind::Main
        }
    );
}

#[test]
fn only_sections_and_blocks_are_enterable() {
    let mut s = Session::new();
    assert_eq!(
        s.enter_block(NodeKind::If).unwrap_err(),
        TraceError::NotEnterable(NodeKind::If)
    );
    assert_eq!(
        s.enter_block(NodeKind::Block).unwrap_err(),
        TraceError::MisplacedStatement(NodeKind::Program)
    );

    let err = s.const_data(|s| s.scope(|_| Ok(()))).unwrap_err();
    assert_eq!(err, TraceError::MisplacedStatement(NodeKind::ConstData));
}

#[test]
fn closure_must_leave_its_block_on_top() {
    let mut s = Session::new();
    let err = s
        .main(|s| {
            s.enter_block(NodeKind::Block)?;
            Ok(())
        })
        .unwrap_err();

    assert_eq!(
        err,
        TraceError::BlockMismatch {
            expected: NodeKind::Main,
            found: NodeKind::Block
        }
    );
}

#[test]
fn symbols_are_dense_and_per_session() {
    let mut first = Session::new();
    let mut second = Session::new();

    assert_eq!(first.next_symbol().as_u32(), 0);
    assert_eq!(first.next_symbol().as_u32(), 1);
    assert_eq!(second.next_symbol().as_u32(), 0);
    assert_eq!(first.symbol_count(), 2);
}

#[test]
fn trace_returns_finished_source() {
    let source = trace(|s| {
        let mut out = s.out_data(|s| s.output::<Float>("out"))?;
        s.main(|s| s.assign(&mut out, 1.0f32))
    })
    .unwrap();

    assert_eq!(source.symbol_count(), 1);
    assert_eq!(source.ast().kind(source.root()), NodeKind::Program);
}

#[test]
fn trace_propagates_errors() {
    let err = trace(|s| s.main(|s| s.main(|_| Ok(())))).unwrap_err();

    assert_eq!(
        err,
        TraceError::MisplacedSection {
            kind: NodeKind::Main,
            parent: NodeKind::Main
        }
    );
}

#[test]
fn sessions_and_artifacts_are_send() {
    fn assert_send<T: Send>() {}

    assert_send::<Session>();
    assert_send::<Source>();
    assert_send::<Program>();
}

#[test]
fn sessions_trace_independently_across_threads() {
    let kernel = |depth: usize| -> String {
        let source = trace(|s| left_deep_sum(s, depth)).unwrap();
        generate(&source).unwrap().source().to_string()
    };

    let handles: Vec<_> = [3, 5]
        .into_iter()
        .map(|depth| std::thread::spawn(move || kernel(depth)))
        .collect();
    let threaded: Vec<String> = handles.into_iter().map(|h| h.join().unwrap()).collect();

    assert_eq!(threaded, vec![kernel(3), kernel(5)]);
    assert!(threaded[0].contains("total = (((a + 1.0) + 1.0) + 1.0);"));
}
