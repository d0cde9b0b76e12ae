pub use self::printer_profile::{PrinterProfile, PrinterProfileBuilder};

mod printer_profile;

use crate::{
    Error,
    Transport,
    command::{BarcodeSystem, BarcodeTextPosition, Command, ControlCode, Emphasis, Font, HardwareOp, Justification, Resolution},
    raster
};
use image::DynamicImage;
use qrcode::{EcLevel, QrCode, Version};
use serde::{Serialize, Deserialize};
use std::path::Path;

/// Paper cut variants
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub enum CutMode {
    Full,
    Partial
}

impl Eq for CutMode{}

/// Main driver structure
///
/// The printer owns its [Transport](crate::Transport) exclusively and
/// translates every semantic operation into esc/pos byte sequences. Each
/// call builds its complete sequence first and then issues a single
/// blocking write, so a validation failure never leaves a half-emitted
/// command in the stream.
/// ```rust,no_run
/// use escpos_driver::{Printer, PrinterProfile, NetworkTransport};
///
/// let transport = NetworkTransport::open("192.168.1.87", 9100)?;
/// let mut printer = Printer::new(transport, PrinterProfile::default())?;
/// printer.text("Hello, world!\n")?;
/// # Ok::<(), escpos_driver::Error>(())
/// ```
pub struct Printer<T: Transport> {
    transport: T,
    printer_profile: PrinterProfile,
    /// Current font and its width in characters
    font_and_width: (Font, u8)
}

impl<T: Transport> Printer<T> {
    /// Binds an open transport to a printer profile.
    ///
    /// Font A must carry a column width in the profile, since it is the
    /// font every printer starts up with.
    pub fn new(transport: T, printer_profile: PrinterProfile) -> Result<Printer<T>, Error> {
        let font_and_width = match printer_profile.columns_per_font.get(&Font::FontA) {
            Some(width) => (Font::FontA, *width),
            None => return Err(Error::UnsupportedFont)
        };
        Ok(Printer {
            transport,
            printer_profile,
            font_and_width
        })
    }

    /// Character columns of the currently selected font.
    pub fn width(&self) -> u8 {
        self.font_and_width.1
    }

    /// Sends raw bytes to the printer
    ///
    /// Every other operation funnels through here; it is public for the odd
    /// command this crate does not model.
    pub fn raw<A: AsRef<[u8]>>(&mut self, bytes: A) -> Result<(), Error> {
        self.transport.write(bytes.as_ref())
    }

    /// Prints a string as-is, without any framing or encoding.
    pub fn text<A: AsRef<str>>(&mut self, content: A) -> Result<(), Error> {
        let content = content.as_ref();
        if content.is_empty() {
            return Err(Error::EmptyText);
        }
        self.raw(content.as_bytes())
    }

    /// Writes a line with an optional right-hand column
    ///
    /// The right column is the receipt staple: an amount flushed against
    /// the right edge of the paper. The main string gets padded with spaces
    /// so the trailer ends exactly at the line width of the current font.
    /// Newlines may only appear at the very end of the trailer; anywhere
    /// else they would wreck the padding arithmetic and are rejected.
    pub fn write(&mut self, string: &str, right_column: Option<&str>, justification: Justification) -> Result<(), Error> {
        let width = self.font_and_width.1 as usize;
        let mut string = string.to_string();
        if justification != Justification::Left && string.chars().count() < width {
            let trimmed_len = string.trim_end_matches('\n').chars().count();
            let blanks = match justification {
                Justification::Right => width - trimmed_len,
                Justification::Center => (width - trimmed_len) / 2,
                Justification::Left => 0
            };
            string = " ".repeat(blanks) + &string;
        }
        let right_column = match right_column {
            Some(right_column) => right_column,
            None => return self.text(string)
        };
        let trailer = right_column.trim_end_matches('\n');
        if string.contains('\n') || trailer.contains('\n') {
            return Err(Error::StrayNewline);
        }
        let mut last_line_len = string.chars().count() % width + trailer.chars().count();
        if last_line_len > width {
            // Fill up the current line so the trailer starts on a fresh one
            let blanks = (width as isize - last_line_len as isize).rem_euclid(width as isize) as usize;
            string += &" ".repeat(blanks);
            last_line_len = string.chars().count() % width + trailer.chars().count();
        }
        if last_line_len < width {
            string += &" ".repeat(width - last_line_len);
        }
        self.text(string + right_column)
    }

    /// Prints an image from a file.
    ///
    /// `scale` shrinks the image relative to the full paper width, where
    /// `1.0` spans the whole printable area. Without it the image is sent
    /// pixel for pixel.
    pub fn image<P: AsRef<Path>>(&mut self, path: P, resolution: Resolution, justification: Justification, scale: Option<f64>) -> Result<(), Error> {
        let image = image::open(path)?;
        self.print_image(&image, resolution, justification, scale)
    }

    /// Prints an already loaded image. See [image](Printer::image).
    pub fn print_image(&mut self, image: &DynamicImage, resolution: Resolution, justification: Justification, scale: Option<f64>) -> Result<(), Error> {
        let feed = raster::rasterize(image, resolution, justification, scale, self.printer_profile.width)?;
        self.raw(feed)
    }

    /// Prints a qr code for the given payload
    ///
    /// Version 4 symbols with 4-pixel modules, centered, at high
    /// resolution.
    pub fn qr<A: AsRef<str>>(&mut self, content: A) -> Result<(), Error> {
        let code = QrCode::with_version(content.as_ref().as_bytes(), Version::Normal(4), EcLevel::M)?;
        let rendered = code.render::<image::Luma<u8>>()
            .module_dimensions(4, 4)
            .build();
        let image = DynamicImage::ImageLuma8(rendered);
        self.print_image(&image, Resolution::High, Justification::Center, None)
    }

    /// Prints a barcode
    ///
    /// `width` is the module width in dots (1 to 255), `height` the bar
    /// height (2 to 6). Both are validated before any byte is emitted. The
    /// barcode is always centered, matching the behavior of virtually every
    /// receipt layout.
    pub fn barcode<A: AsRef<str>>(&mut self, code: A, system: BarcodeSystem, width: u8, height: u8, position: BarcodeTextPosition, font: Font) -> Result<(), Error> {
        let code = code.as_ref();
        if code.is_empty() {
            return Err(Error::EmptyBarcode);
        }
        // The u8 type already caps both values at 255
        if width < 1 || height < 2 || height > 6 {
            return Err(Error::BarcodeSize{width, height});
        }
        let mut feed = Command::Justify{justification: Justification::Center}.as_bytes();
        feed.extend_from_slice(&Command::BarcodeHeight{height}.as_bytes());
        feed.extend_from_slice(&Command::BarcodeWidth{width}.as_bytes());
        feed.extend_from_slice(&Command::BarcodeFont{font}.as_bytes());
        feed.extend_from_slice(&Command::BarcodeTextPosition{position}.as_bytes());
        feed.extend_from_slice(&Command::BarcodeSelect{system}.as_bytes());
        feed.extend_from_slice(code.as_bytes());
        self.raw(feed)
    }

    /// Sets the text properties for everything printed afterwards
    ///
    /// `width` and `height` accept 1 or 2, for normal and doubled character
    /// size. Commands are emitted in a fixed order (size, emphasis, font,
    /// alignment) because some printers are sensitive to it.
    /// [Emphasis::Normal](crate::command::Emphasis) emits nothing and leaves
    /// whatever emphasis is active untouched.
    pub fn set(&mut self, justification: Justification, font: Font, emphasis: Emphasis, width: u8, height: u8) -> Result<(), Error> {
        let mut feed = Vec::new();
        if width == 2 && height != 2 {
            feed.extend_from_slice(&Command::SizeNormal.as_bytes());
            feed.extend_from_slice(&Command::DoubleWidth.as_bytes());
        } else if height == 2 && width != 2 {
            feed.extend_from_slice(&Command::SizeNormal.as_bytes());
            feed.extend_from_slice(&Command::DoubleHeight.as_bytes());
        } else if width == 2 && height == 2 {
            feed.extend_from_slice(&Command::DoubleWidth.as_bytes());
            feed.extend_from_slice(&Command::DoubleHeight.as_bytes());
        } else {
            feed.extend_from_slice(&Command::SizeNormal.as_bytes());
        }
        match emphasis {
            Emphasis::Bold => {
                feed.extend_from_slice(&Command::BoldOn.as_bytes());
                feed.extend_from_slice(&Command::UnderlineOff.as_bytes());
            },
            Emphasis::Underline => {
                feed.extend_from_slice(&Command::BoldOff.as_bytes());
                feed.extend_from_slice(&Command::Underline1Dot.as_bytes());
            },
            Emphasis::Underline2 => {
                feed.extend_from_slice(&Command::BoldOff.as_bytes());
                feed.extend_from_slice(&Command::Underline2Dot.as_bytes());
            },
            Emphasis::BoldUnderline => {
                feed.extend_from_slice(&Command::BoldOn.as_bytes());
                feed.extend_from_slice(&Command::Underline1Dot.as_bytes());
            },
            Emphasis::BoldUnderline2 => {
                feed.extend_from_slice(&Command::BoldOn.as_bytes());
                feed.extend_from_slice(&Command::Underline2Dot.as_bytes());
            },
            // Normal leaves the prior emphasis in place
            Emphasis::Normal => ()
        }
        feed.extend_from_slice(&Command::TextFont{font}.as_bytes());
        feed.extend_from_slice(&Command::Justify{justification}.as_bytes());
        self.raw(feed)
    }

    /// Selects the font and adjusts the session line width to it.
    pub fn font(&mut self, font: Font) -> Result<(), Error> {
        let width = match self.printer_profile.columns_per_font.get(&font) {
            Some(width) => *width,
            None => return Err(Error::UnsupportedFont)
        };
        self.raw(Command::SelectFont{font}.as_bytes())?;
        self.font_and_width = (font, width);
        Ok(())
    }

    /// Turns bold printing on or off.
    pub fn bold(&mut self, bold: bool) -> Result<(), Error> {
        if bold {
            self.raw(Command::BoldOn.as_bytes())
        } else {
            self.raw(Command::BoldOff.as_bytes())
        }
    }

    /// Cuts the paper
    ///
    /// Six line feeds go out first, so the cutter lands below the last
    /// printed line.
    pub fn cut(&mut self, mode: CutMode) -> Result<(), Error> {
        let mut feed = b"\n\n\n\n\n\n".to_vec();
        match mode {
            CutMode::Full => feed.extend_from_slice(&Command::CutFull.as_bytes()),
            CutMode::Partial => feed.extend_from_slice(&Command::CutPartial.as_bytes())
        }
        self.raw(feed)
    }

    /// Sends a pulse to kick the cash drawer. Only pins 2 and 5 exist on
    /// the RJ11 connector.
    pub fn cashdraw(&mut self, pin: u8) -> Result<(), Error> {
        let command = match pin {
            2 => Command::CashDrawerPin2,
            5 => Command::CashDrawerPin5,
            other => return Err(Error::InvalidCashDrawerPin(other))
        };
        self.raw(command.as_bytes())
    }

    /// Hardware operations: initialize, select or reset the printer.
    pub fn hw(&mut self, op: HardwareOp) -> Result<(), Error> {
        self.raw(Command::Hardware{op}.as_bytes())
    }

    /// Sends a single feed control character.
    pub fn control(&mut self, code: ControlCode) -> Result<(), Error> {
        self.raw(Command::Control{code}.as_bytes())
    }

    /// Writes `times` newlines, optionally followed by a partial cut.
    pub fn line_feed(&mut self, times: u8, cut: bool) -> Result<(), Error> {
        if times > 0 {
            let feed = vec![b'\n'; times as usize];
            self.raw(feed)?;
        }
        if cut {
            self.cut(CutMode::Partial)?;
        }
        Ok(())
    }

    /// Feeds enough paper for the cut to land beneath the printed text,
    /// then cuts.
    pub fn line_feed_cut(&mut self) -> Result<(), Error> {
        self.line_feed(6, true)
    }

    /// Closes the underlying transport, releasing the device.
    pub fn close(mut self) -> Result<(), Error> {
        self.transport.close()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{GrayImage, Luma};

    /// In-memory transport capturing everything the encoder emits.
    struct Sink(Vec<u8>);

    impl Transport for Sink {
        fn write(&mut self, bytes: &[u8]) -> Result<(), Error> {
            self.0.extend_from_slice(bytes);
            Ok(())
        }

        fn close(&mut self) -> Result<(), Error> {
            Ok(())
        }
    }

    fn printer() -> Printer<Sink> {
        Printer::new(Sink(Vec::new()), PrinterProfile::default()).unwrap()
    }

    #[test]
    fn text_passes_bytes_through() {
        let mut printer = printer();
        printer.text("TOTAL\n").unwrap();
        assert_eq!(printer.transport.0, b"TOTAL\n");
    }

    #[test]
    fn empty_text_is_rejected() {
        let mut printer = printer();
        match printer.text("") {
            Err(Error::EmptyText) => (),
            other => panic!("expected empty text error, got {:?}", other)
        }
        assert!(printer.transport.0.is_empty());
    }

    #[test]
    fn barcode_emits_commands_in_fixed_order() {
        let mut printer = printer();
        printer.barcode("4006381333931", BarcodeSystem::Ean13, 2, 5, BarcodeTextPosition::Below, Font::FontA).unwrap();
        let mut expected = vec![
            0x1b, 0x61, 0x01, // center
            0x1d, 0x68, 0x05, // height 5
            0x1d, 0x77, 0x02, // module width 2
            0x1d, 0x66, 0x00, // font A
            0x1d, 0x48, 0x02, // text below
            0x1d, 0x6b, 0x02  // EAN13
        ];
        expected.extend_from_slice(b"4006381333931");
        assert_eq!(printer.transport.0, expected);
    }

    #[test]
    fn barcode_bounds_are_conjunctive() {
        let mut printer = printer();
        for (width, height) in &[(0u8, 5u8), (2, 1), (2, 7)] {
            match printer.barcode("12345678", BarcodeSystem::Itf, *width, *height, BarcodeTextPosition::Off, Font::FontA) {
                Err(Error::BarcodeSize{..}) => (),
                other => panic!("expected barcode size error, got {:?}", other)
            }
        }
        assert!(printer.transport.0.is_empty());
    }

    #[test]
    fn empty_barcode_writes_nothing() {
        let mut printer = printer();
        assert!(matches!(printer.barcode("", BarcodeSystem::Code39, 2, 5, BarcodeTextPosition::Below, Font::FontA), Err(Error::EmptyBarcode)));
        assert!(printer.transport.0.is_empty());
    }

    #[test]
    fn set_orders_size_emphasis_font_alignment() {
        let mut printer = printer();
        printer.set(Justification::Center, Font::FontA, Emphasis::BoldUnderline, 2, 2).unwrap();
        assert_eq!(printer.transport.0, vec![
            0x1b, 0x21, 0x20, // double width
            0x1b, 0x21, 0x10, // double height
            0x1b, 0x45, 0x01, // bold on
            0x1b, 0x2d, 0x01, // underline on
            0x1b, 0x21, 0x00, // font A
            0x1b, 0x61, 0x01  // center
        ]);
    }

    #[test]
    fn set_normal_emphasis_emits_no_emphasis_bytes() {
        let mut printer = printer();
        printer.set(Justification::Left, Font::FontB, Emphasis::Normal, 1, 1).unwrap();
        assert_eq!(printer.transport.0, vec![
            0x1b, 0x21, 0x00, // size normal
            0x1b, 0x21, 0x01, // font B
            0x1b, 0x61, 0x00  // left
        ]);
    }

    #[test]
    fn set_single_doubling_resets_size_first() {
        let mut wide = printer();
        wide.set(Justification::Left, Font::FontA, Emphasis::Normal, 2, 1).unwrap();
        assert_eq!(&wide.transport.0[0..6], &[0x1b, 0x21, 0x00, 0x1b, 0x21, 0x20]);
        let mut tall = printer();
        tall.set(Justification::Left, Font::FontA, Emphasis::Normal, 1, 2).unwrap();
        assert_eq!(&tall.transport.0[0..6], &[0x1b, 0x21, 0x00, 0x1b, 0x21, 0x10]);
    }

    #[test]
    fn font_selection_updates_line_width() {
        let mut printer = printer();
        assert_eq!(printer.width(), 32);
        printer.font(Font::FontB).unwrap();
        assert_eq!(printer.width(), 42);
        assert_eq!(printer.transport.0, vec![0x1b, 0x4d, 0x01]);
    }

    #[test]
    fn cut_feeds_six_lines_first() {
        let mut printer = printer();
        printer.cut(CutMode::Full).unwrap();
        let mut expected = b"\n\n\n\n\n\n".to_vec();
        expected.extend_from_slice(&[0x1d, 0x56, 0x00]);
        assert_eq!(printer.transport.0, expected);
    }

    #[test]
    fn line_feed_cut_ends_with_partial_cut() {
        let mut printer = printer();
        printer.line_feed_cut().unwrap();
        // Six explicit feeds, then the cut adds its own six clearance feeds.
        let mut expected = vec![b'\n'; 12];
        expected.extend_from_slice(&[0x1d, 0x56, 0x01]);
        assert_eq!(printer.transport.0, expected);
    }

    #[test]
    fn cashdraw_accepts_only_real_pins() {
        let mut printer = printer();
        printer.cashdraw(2).unwrap();
        printer.cashdraw(5).unwrap();
        assert_eq!(printer.transport.0, vec![0x1b, 0x70, 0x00, 0x1b, 0x70, 0x01]);
        match printer.cashdraw(3) {
            Err(Error::InvalidCashDrawerPin(3)) => (),
            other => panic!("expected invalid pin error, got {:?}", other)
        }
        assert_eq!(printer.transport.0.len(), 6);
    }

    #[test]
    fn hardware_and_control_bytes() {
        let mut printer = printer();
        printer.hw(HardwareOp::Init).unwrap();
        printer.control(ControlCode::FormFeed).unwrap();
        assert_eq!(printer.transport.0, vec![0x1b, 0x40, 0x0c]);
    }

    #[test]
    fn write_flushes_right_column_to_line_width() {
        let mut printer = printer();
        printer.write("Item", Some("9.99\n"), Justification::Left).unwrap();
        let mut expected = b"Item".to_vec();
        expected.extend_from_slice(" ".repeat(24).as_bytes());
        expected.extend_from_slice(b"9.99\n");
        assert_eq!(printer.transport.0, expected);
    }

    #[test]
    fn write_wraps_when_trailer_does_not_fit() {
        let mut printer = printer();
        let item = "A rather long product name";
        printer.write(item, Some("10.00\n"), Justification::Left).unwrap();
        let written = String::from_utf8(printer.transport.0.clone()).unwrap();
        // The trailer must end exactly at a multiple of the line width.
        assert_eq!(written.trim_end_matches('\n').chars().count() % 32, 0);
        assert!(written.trim_end_matches('\n').ends_with("10.00"));
        assert!(written.starts_with(item));
    }

    #[test]
    fn write_rejects_inner_newlines() {
        let mut printer = printer();
        assert!(matches!(printer.write("two\nlines", Some("1.00"), Justification::Left), Err(Error::StrayNewline)));
        assert!(matches!(printer.write("line", Some("1.\n00"), Justification::Left), Err(Error::StrayNewline)));
        assert!(printer.transport.0.is_empty());
    }

    #[test]
    fn write_centers_short_lines() {
        let mut printer = printer();
        printer.write("Hello", None, Justification::Center).unwrap();
        let mut expected = " ".repeat(13).into_bytes();
        expected.extend_from_slice(b"Hello");
        assert_eq!(printer.transport.0, expected);
    }

    #[test]
    fn write_right_aligns_against_line_width() {
        let mut printer = printer();
        printer.write("Hello\n", None, Justification::Right).unwrap();
        let mut expected = " ".repeat(27).into_bytes();
        expected.extend_from_slice(b"Hello\n");
        assert_eq!(printer.transport.0, expected);
    }

    #[test]
    fn print_image_matches_raster_output() {
        let mut printer = printer();
        let image = DynamicImage::ImageLuma8(GrayImage::from_pixel(10, 8, Luma([0u8])));
        printer.print_image(&image, Resolution::Low, Justification::Left, None).unwrap();
        let expected = raster::rasterize(&image, Resolution::Low, Justification::Left, None, 384).unwrap();
        assert_eq!(printer.transport.0, expected);
    }

    #[test]
    fn too_wide_image_writes_nothing() {
        let mut printer = printer();
        let image = DynamicImage::ImageLuma8(GrayImage::from_pixel(400, 8, Luma([0u8])));
        assert!(matches!(
            printer.print_image(&image, Resolution::Low, Justification::Left, None),
            Err(Error::ImageTooWide{width: 400, max_width: 384})
        ));
        assert!(printer.transport.0.is_empty());
    }

    #[test]
    fn qr_prints_a_high_resolution_raster() {
        let mut printer = printer();
        printer.qr("https://example.com").unwrap();
        assert_eq!(&printer.transport.0[0..3], &[0x1b, 0x2a, 0x21]);
        assert!(!printer.transport.0.is_empty());
    }
}
