#[diplomat::bridge]
#[diplomat::abi_rename = "messageformat_{0}"]
#[diplomat::attr(auto, namespace = "messageformat")]
pub mod ffi {
    use messageformat::options;

    /// One of the classic ICU format lengths, or `None` to leave that
    /// half of the output out entirely.
    #[diplomat::enum_convert(options::DateFormatStyle)]
    pub enum DateFormatStyle {
        None,
        Short,
        Medium,
        Long,
        Full,
    }
}
