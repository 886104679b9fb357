//! Tests for handler registration and dispatch.

use std::cell::{Cell, RefCell};
use std::rc::Rc;
use strictly_tictactoe::{Board, BoardErrorKind, EventContext, EventKind, Handler, Payload};

type Tok = &'static str;

fn counter() -> (Handler<Tok>, Rc<Cell<usize>>) {
    let calls = Rc::new(Cell::new(0));
    let sink = Rc::clone(&calls);
    let handler = Handler::new(move |_: &mut Board<Tok>, _: &mut EventContext, _: &Payload<Tok>| {
        sink.set(sink.get() + 1)
    });
    (handler, calls)
}

/// Plays the sequence used by the registration tests: four placements, one
/// rejected move, one victory, then a reset.
fn play_scripted_game(board: &mut Board<Tok>) {
    board.place("X", 0, 0).unwrap();
    board.place("Y", 0, 0).unwrap();
    board.place("X", 1, 0).unwrap();
    board.place("Y", 1, 1).unwrap();
    board.place("X", 2, 0).unwrap();
    board.reset();
}

#[test]
fn test_register_handlers_for_several_events() {
    let (handler, calls) = counter();
    let mut board = Board::new();
    board.on("move reset victory badmove", &handler).unwrap();

    play_scripted_game(&mut board);

    // 4 moves + 1 badmove + 1 victory + 1 reset
    assert_eq!(calls.get(), 7);
}

#[test]
fn test_register_with_sequence_of_kinds() {
    let (handler, calls) = counter();
    let mut board = Board::new();
    board
        .on(
            vec![
                EventKind::Move,
                EventKind::Reset,
                EventKind::Victory,
                EventKind::BadMove,
            ],
            &handler,
        )
        .unwrap();

    play_scripted_game(&mut board);

    assert_eq!(calls.get(), 7);
}

#[test]
fn test_register_with_slice_of_names() {
    let (handler, calls) = counter();
    let mut board = Board::new();
    board.on(&["move", "badmove"][..], &handler).unwrap();

    play_scripted_game(&mut board);

    assert_eq!(calls.get(), 5);
}

#[test]
fn test_duplicate_registration_is_ignored() {
    let (handler, calls) = counter();
    let mut board = Board::new();
    board
        .on(EventKind::Move, &handler)
        .unwrap()
        .on("move", &handler.clone())
        .unwrap();

    board.place("X", 1, 1).unwrap();

    assert_eq!(board.handler_count(EventKind::Move), 1);
    assert_eq!(calls.get(), 1);
}

#[test]
fn test_unregister_handlers() {
    let (handler, calls) = counter();
    let mut board = Board::new();
    board
        .on("move reset victory badmove", &handler)
        .unwrap()
        .off("move reset victory badmove", std::slice::from_ref(&handler))
        .unwrap();

    play_scripted_game(&mut board);

    assert_eq!(calls.get(), 0);
}

#[test]
fn test_unregister_only_named_handler() {
    let (first, first_calls) = counter();
    let (second, second_calls) = counter();
    let mut board = Board::new();
    board
        .on(EventKind::Move, &first)
        .unwrap()
        .on(EventKind::Move, &second)
        .unwrap()
        .off(EventKind::Move, std::slice::from_ref(&first))
        .unwrap();

    board.place("X", 0, 0).unwrap();

    assert_eq!(first_calls.get(), 0);
    assert_eq!(second_calls.get(), 1);
}

#[test]
fn test_unregister_all_when_no_handler_given() {
    let (first, first_calls) = counter();
    let (second, second_calls) = counter();
    let mut board = Board::new();
    board
        .on("move reset victory badmove", &first)
        .unwrap()
        .on("move reset victory badmove", &second)
        .unwrap()
        .off("move reset victory badmove", &[])
        .unwrap();

    play_scripted_game(&mut board);

    assert_eq!(first_calls.get(), 0);
    assert_eq!(second_calls.get(), 0);
    assert_eq!(board.handler_count(EventKind::Move), 0);
}

#[test]
fn test_handlers_run_in_reverse_registration_order() {
    let order = Rc::new(RefCell::new(Vec::new()));
    let tagged = |tag: &'static str| {
        let order = Rc::clone(&order);
        Handler::new(move |_: &mut Board<Tok>, _: &mut EventContext, _: &Payload<Tok>| {
            order.borrow_mut().push(tag)
        })
    };
    let h1 = tagged("h1");
    let h2 = tagged("h2");

    let mut board = Board::new();
    board
        .on(EventKind::Reset, &h1)
        .unwrap()
        .on(EventKind::Reset, &h2)
        .unwrap();
    board.reset();

    assert_eq!(*order.borrow(), vec!["h2", "h1"]);
}

#[test]
fn test_prevent_default_is_visible_to_later_handlers() {
    let observed = Rc::new(Cell::new(None));
    let callback2 = {
        let observed = Rc::clone(&observed);
        Handler::new(move |_: &mut Board<Tok>, event: &mut EventContext, _: &Payload<Tok>| {
            observed.set(Some(event.is_default_prevented()))
        })
    };
    let callback = Handler::new(|_: &mut Board<Tok>, event: &mut EventContext, _: &Payload<Tok>| {
        assert!(!event.is_default_prevented());
        event.prevent_default();
    });

    let mut board = Board::new();
    board
        .on(EventKind::Reset, &callback2)
        .unwrap()
        .on(EventKind::Reset, &callback)
        .unwrap();
    board.reset();

    assert_eq!(observed.get(), Some(true));
}

#[test]
fn test_each_emission_gets_a_fresh_context() {
    let prevented = Rc::new(RefCell::new(Vec::new()));
    let handler = {
        let prevented = Rc::clone(&prevented);
        Handler::new(move |_: &mut Board<Tok>, event: &mut EventContext, _: &Payload<Tok>| {
            prevented.borrow_mut().push(event.is_default_prevented());
            event.prevent_default();
        })
    };

    let mut board = Board::new();
    board.on(EventKind::Move, &handler).unwrap();
    board.place("X", 0, 0).unwrap();
    board.place("O", 1, 0).unwrap();

    assert_eq!(*prevented.borrow(), vec![false, false]);
}

#[test]
fn test_handler_receives_move_payload() {
    let moves = Rc::new(RefCell::new(Vec::new()));
    let handler = {
        let moves = Rc::clone(&moves);
        Handler::new(move |_: &mut Board<Tok>, event: &mut EventContext, payload: &Payload<Tok>| {
            assert_eq!(event.kind(), EventKind::Move);
            if let Payload::Move(mv) = payload {
                moves.borrow_mut().push((*mv.player(), mv.x(), mv.y()));
            }
        })
    };

    let mut board = Board::new();
    board.on(EventKind::Move, &handler).unwrap();
    board.place("X", 2, 1).unwrap();

    assert_eq!(*moves.borrow(), vec![("X", 2, 1)]);
}

#[test]
fn test_unknown_event_name_is_an_argument_error() {
    let (handler, _) = counter();
    let mut board = Board::new();

    let err = board.on("move custom", &handler).unwrap_err();
    assert!(matches!(err.kind(), BoardErrorKind::Argument(msg) if msg.contains("custom")));
    assert_eq!(board.handler_count(EventKind::Move), 0);

    assert!(board.off("", &[]).is_err());
}

#[test]
fn test_empty_event_selection_is_an_argument_error() {
    let (handler, _) = counter();
    let mut board = Board::new();
    let no_names: &[&str] = &[];

    let err = board.on(no_names, &handler).unwrap_err();
    assert!(matches!(err.kind(), BoardErrorKind::Argument(_)));
    let err = board.on(Vec::<EventKind>::new(), &handler).unwrap_err();
    assert!(matches!(err.kind(), BoardErrorKind::Argument(_)));
    let err = board.off(no_names, &[]).unwrap_err();
    assert!(matches!(err.kind(), BoardErrorKind::Argument(_)));
    let err = board.off(Vec::<EventKind>::new(), &[]).unwrap_err();
    assert!(matches!(err.kind(), BoardErrorKind::Argument(_)));

    for kind in [EventKind::Reset, EventKind::Move, EventKind::BadMove] {
        assert_eq!(board.handler_count(kind), 0);
    }
}

#[test]
fn test_handler_can_answer_a_move() {
    let bot = Handler::new(|board: &mut Board<Tok>, _: &mut EventContext, payload: &Payload<Tok>| {
        let Payload::Move(mv) = payload else { return };
        if *mv.player() != "X" {
            return;
        }
        let free = (0..3)
            .flat_map(|y| (0..3).map(move |x| (x, y)))
            .find(|&(x, y)| board.is_available(x, y));
        if let Some((x, y)) = free {
            board.place("O", x, y).unwrap();
        }
    });

    let mut board = Board::new();
    board.on(EventKind::Move, &bot).unwrap();
    board.place("X", 1, 1).unwrap();

    let history = board.history();
    assert_eq!(history.len(), 2);
    assert_eq!(*history[1].player(), "O");
    assert_eq!((history[1].x(), history[1].y()), (0, 0));
}

#[test]
fn test_handler_registered_during_dispatch_waits_for_next_emission() {
    let (late, late_calls) = counter();
    let registrar = {
        let late = late.clone();
        Handler::new(move |board: &mut Board<Tok>, _: &mut EventContext, _: &Payload<Tok>| {
            board.on(EventKind::Move, &late).unwrap();
        })
    };

    let mut board = Board::new();
    board.on(EventKind::Move, &registrar).unwrap();
    board.place("X", 0, 0).unwrap();
    assert_eq!(late_calls.get(), 0);

    board.place("O", 1, 0).unwrap();
    assert_eq!(late_calls.get(), 1);
    assert_eq!(board.handler_count(EventKind::Move), 2);
}
