pub mod d400_profitability;
