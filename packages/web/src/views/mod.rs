pub use ui::views::Register;
