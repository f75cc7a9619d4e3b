pub mod u501_curtain_quote;
