/// Fills `buf` with a simple placeholder payload: byte `i` holds `i mod 256`.
pub fn make_payload(buf: &mut [u8]) {
    for (i, b) in buf.iter_mut().enumerate() {
        *b = i as u8;
    }
}

#[cfg(test)]
mod tests {
    use super::make_payload;

    #[test]
    fn test_make_payload() {
        let mut buf = [0xAAu8; 300];
        make_payload(&mut buf);
        assert_eq!(buf[0], 0);
        assert_eq!(buf[1], 1);
        assert_eq!(buf[255], 255);
        assert_eq!(buf[256], 0);
        assert_eq!(buf[299], 43);
        make_payload(&mut []);
    }
}
