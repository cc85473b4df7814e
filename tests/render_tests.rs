use tiny_battleship::{fire, render, Board, Style};

#[test]
fn test_revealed_board_layout() {
    let board = Board::with_ships(4, &[(0, 0), (1, 1)]).unwrap();
    assert_eq!(
        render(&board, true).to_string(),
        "S 0 0 0\n0 S 0 0\n0 0 0 0\n0 0 0 0\n"
    );
}

#[test]
fn test_concealed_board_hides_ships() {
    let board = Board::with_ships(4, &[(0, 0), (1, 1)]).unwrap();
    let text = render(&board, false);
    assert_eq!(text.to_string(), "0 0 0 0\n0 0 0 0\n0 0 0 0\n0 0 0 0\n");
    assert!(text.spans().iter().all(|s| s.style != Style::Ship));
}

#[test]
fn test_hits_and_misses_always_visible() {
    let mut board = Board::with_ships(2, &[(0, 0), (1, 1)]).unwrap();
    fire(&mut board, 0, 0).unwrap();
    fire(&mut board, 0, 1).unwrap();

    assert_eq!(render(&board, false).to_string(), "X M\n0 0\n");
    assert_eq!(render(&board, true).to_string(), "X M\n0 S\n");
}

#[test]
fn test_cell_styles() {
    let mut board = Board::with_ships(2, &[(0, 0), (1, 0)]).unwrap();
    fire(&mut board, 1, 0).unwrap();
    fire(&mut board, 1, 1).unwrap();

    let styles: Vec<Style> = render(&board, true)
        .spans()
        .iter()
        .filter(|s| s.style != Style::Plain)
        .map(|s| s.style)
        .collect();
    assert_eq!(styles, vec![Style::Ship, Style::Empty, Style::Hit, Style::Miss]);
}
