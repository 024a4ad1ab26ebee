use super::*;

fn words(numeral: &str) -> String {
    ChineseNumerals.format_number(numeral)
}

#[test]
fn test_small_integers() {
    assert_eq!(words("0"), "零");
    assert_eq!(words("7"), "七");
    assert_eq!(words("10"), "十");
    assert_eq!(words("15"), "十五");
    assert_eq!(words("45"), "四十五");
    assert_eq!(words("123"), "一百二十三");
    assert_eq!(words("110"), "一百一十");
}

#[test]
fn test_thousands_and_zeros() {
    assert_eq!(words("3000"), "三千");
    assert_eq!(words("3498"), "三千四百九十八");
    assert_eq!(words("1001"), "一千零一");
    assert_eq!(words("1010"), "一千零一十");
    assert_eq!(words("007"), "七");
}

#[test]
fn test_large_groups() {
    assert_eq!(words("10001"), "一万零一");
    assert_eq!(words("100000"), "十万");
    assert_eq!(words("101234"), "十万一千二百三十四");
    assert_eq!(words("1000010"), "一百万零一十");
    assert_eq!(words("100000001"), "一亿零一");
    assert_eq!(words("100010000"), "一亿零一万");
}

#[test]
fn test_overlong_read_digit_by_digit() {
    assert_eq!(words("12345678901234567"), "一二三四五六七八九零一二三四五六七");
}

#[test]
fn test_negative_and_decimal() {
    assert_eq!(words("-5"), "负五");
    assert_eq!(words("-12"), "负十二");
    assert_eq!(words("12.5"), "十二点五");
    assert_eq!(words("7.89"), "七点八九");
    assert_eq!(words("98.76"), "九十八点七六");
    assert_eq!(words("0.05"), "零点零五");
}

#[test]
fn test_substitute_keeps_surrounding_text() {
    let cases = [
        ("我有123个苹果。", "我有一百二十三个苹果。"),
        ("他住在45楼，旁边是7号房间。", "他住在四十五楼，旁边是七号房间。"),
        ("今天室外温度是-5度。", "今天室外温度是负五度。"),
        ("股票下跌了-12点，指数变成3498点。", "股票下跌了负十二点，指数变成三千四百九十八点。"),
        ("这个房间面积是12.5平方米。", "这个房间面积是十二点五平方米。"),
        ("请打开5G网络。", "请打开五G网络。"),
        ("他买了一台4K电视。", "他买了一台四K电视。"),
        ("密码是123ABC。", "密码是一百二十三ABC。"),
        ("总共是98.76%，差不多。", "总共是九十八点七六%，差不多。"),
        ("前面有0个人，后面有10个人。", "前面有零个人，后面有十个人。"),
    ];
    for (input, expected) in cases {
        assert_eq!(substitute_numerals(input, &ChineseNumerals), expected);
    }
}

#[test]
fn test_substitute_without_numerals_borrows() {
    let sentence = "没有数字。";
    assert!(matches!(
        substitute_numerals(sentence, &ChineseNumerals),
        Cow::Borrowed(_)
    ));
}

struct Bracketed;

impl NumberFormatter for Bracketed {
    fn format_number(&self, numeral: &str) -> String {
        format!("<{numeral}>")
    }
}

#[test]
fn test_substitute_passes_exact_numeral() {
    assert_eq!(
        substitute_numerals("a-1.5b 20, 3.", &Bracketed),
        "a<-1.5>b <20>, <3>."
    );
}
