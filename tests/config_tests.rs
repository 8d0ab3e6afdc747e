use tictactoe_minimax::{Board, Minimax, MoveOrder, SearchConfig};

#[test]
fn test_config_builder_methods() {
    let config = SearchConfig::default()
        .with_move_order(MoveOrder::Shuffled)
        .with_seed(1234);

    assert_eq!(config.move_order, MoveOrder::Shuffled);
    assert_eq!(config.seed, Some(1234));
}

#[test]
fn test_config_default_values() {
    let config = SearchConfig::default();

    assert_eq!(config.move_order, MoveOrder::RowMajor);
    assert_eq!(config.seed, None);
}

#[test]
fn test_searcher_keeps_its_config() {
    let config = SearchConfig::default().with_move_order(MoveOrder::Unordered);
    let minimax: Minimax<Board> = Minimax::new(config);

    assert_eq!(minimax.config().move_order, MoveOrder::Unordered);
}
