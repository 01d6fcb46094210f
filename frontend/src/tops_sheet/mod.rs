pub mod detail_top_sheet;
