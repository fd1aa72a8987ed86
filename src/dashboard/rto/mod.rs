pub mod metric_card_rto;
