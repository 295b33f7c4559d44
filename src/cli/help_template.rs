use indoc::indoc;

// Help text template with placeholder
pub const HELP_TEMPLATE: &str = indoc! {r#"
    Examples:
      # Checksum a file
      %BINARY_NAME% engine_i486.so

      # Compare two files by checksum
      %BINARY_NAME% a.bin
      %BINARY_NAME% b.bin

      # Verify against a known value
      [ "$(%BINARY_NAME% release.tar)" = "CBF43926" ] && echo ok

    The checksum is the standard CRC-32 (IEEE 802.3, polynomial 0xEDB88320)
    as computed by zlib, gzip and PNG, printed as 8 uppercase hex digits.
"#};
