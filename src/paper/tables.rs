use super::{
    Difficulty::{self, Extreme, High, Low, Mid, MidLow},
    QuestionInfo,
};

/// Declared maximum score of every paper.
pub(super) const TOTAL_SCORE: f64 = 100.0;

/// 수와 연산
pub(crate) const NUMBER_AND_OPERATION: &str = "수와 연산";
/// 문자와 식
pub(crate) const LETTERS_AND_EXPRESSIONS: &str = "문자와 식";
/// 함수
pub(crate) const FUNCTIONS: &str = "함수";
/// 기하
pub(crate) const GEOMETRY: &str = "기하";
/// 확률과 통계
pub(crate) const PROBABILITY_AND_STATISTICS: &str = "확률과 통계";
/// 다항식
pub(crate) const POLYNOMIALS: &str = "다항식";
/// 방정식과 부등식
pub(crate) const EQUATIONS_AND_INEQUALITIES: &str = "방정식과 부등식";
/// 도형의 방정식
pub(crate) const EQUATIONS_OF_FIGURES: &str = "도형의 방정식";
/// 집합과 명제
pub(crate) const SETS_AND_PROPOSITIONS: &str = "집합과 명제";

/// Shorthand constructor so the tables below stay one row per question.
const fn q(
    number: u32,
    area: &'static str,
    difficulty: Difficulty,
    score: f64,
    content: &'static str,
) -> QuestionInfo {
    QuestionInfo {
        number,
        area,
        difficulty,
        score,
        content,
    }
}

/// MONO
pub(super) const MONO: [QuestionInfo; 25] = [
    q(1, NUMBER_AND_OPERATION, Low, 3.0, "소인수분해와 최대공약수"),
    q(2, NUMBER_AND_OPERATION, Low, 3.0, "정수와 유리수의 대소 관계"),
    q(3, NUMBER_AND_OPERATION, MidLow, 3.5, "유리수의 사칙연산"),
    q(4, NUMBER_AND_OPERATION, MidLow, 3.5, "순환소수를 분수로 나타내기"),
    q(5, NUMBER_AND_OPERATION, Mid, 4.0, "제곱근의 성질과 대소 비교"),
    q(6, NUMBER_AND_OPERATION, High, 4.5, "무리수를 포함한 식의 계산"),
    q(7, LETTERS_AND_EXPRESSIONS, Low, 3.0, "문자를 사용한 식의 값"),
    q(8, LETTERS_AND_EXPRESSIONS, MidLow, 3.5, "일차방정식의 풀이"),
    q(9, LETTERS_AND_EXPRESSIONS, MidLow, 3.5, "지수법칙을 이용한 단항식 계산"),
    q(10, LETTERS_AND_EXPRESSIONS, Mid, 4.0, "다항식의 곱셈과 곱셈공식"),
    q(11, LETTERS_AND_EXPRESSIONS, Mid, 4.0, "연립일차방정식의 활용"),
    q(12, LETTERS_AND_EXPRESSIONS, High, 4.5, "일차부등식의 활용"),
    q(13, LETTERS_AND_EXPRESSIONS, Extreme, 5.0, "인수분해를 이용한 이차방정식의 활용"),
    q(14, FUNCTIONS, Low, 3.0, "좌표평면과 그래프 읽기"),
    q(15, FUNCTIONS, MidLow, 3.5, "정비례와 반비례"),
    q(16, FUNCTIONS, Mid, 4.0, "일차함수의 기울기와 절편"),
    q(17, FUNCTIONS, Mid, 4.0, "일차함수와 일차방정식의 관계"),
    q(18, FUNCTIONS, High, 4.5, "이차함수의 꼭짓점과 축"),
    q(19, FUNCTIONS, Extreme, 5.0, "이차함수의 최대·최소 활용"),
    q(20, GEOMETRY, Low, 3.0, "평행선과 엇각·동위각"),
    q(21, GEOMETRY, MidLow, 3.5, "삼각형의 합동 조건"),
    q(22, GEOMETRY, Mid, 4.0, "이등변삼각형의 성질"),
    q(23, GEOMETRY, High, 4.5, "닮음비와 넓이의 비"),
    q(24, GEOMETRY, Extreme, 5.5, "피타고라스 정리의 활용"),
    q(25, GEOMETRY, Extreme, 6.5, "원의 성질과 삼각비 종합"),
];

/// DI
pub(super) const DI: [QuestionInfo; 25] = [
    q(1, NUMBER_AND_OPERATION, Low, 3.0, "제곱근의 뜻과 표현"),
    q(2, NUMBER_AND_OPERATION, MidLow, 3.5, "근호를 포함한 식의 사칙연산"),
    q(3, NUMBER_AND_OPERATION, Mid, 4.0, "분모의 유리화"),
    q(4, NUMBER_AND_OPERATION, High, 4.5, "실수의 대소 관계와 수직선"),
    q(5, LETTERS_AND_EXPRESSIONS, Low, 3.0, "다항식의 곱셈"),
    q(6, LETTERS_AND_EXPRESSIONS, MidLow, 3.5, "곱셈공식의 변형"),
    q(7, LETTERS_AND_EXPRESSIONS, MidLow, 3.5, "인수분해 공식"),
    q(8, LETTERS_AND_EXPRESSIONS, Mid, 4.0, "이차방정식의 근의 공식"),
    q(9, LETTERS_AND_EXPRESSIONS, High, 4.5, "이차방정식의 근과 계수"),
    q(10, LETTERS_AND_EXPRESSIONS, Extreme, 5.0, "이차방정식의 활용 문제"),
    q(11, FUNCTIONS, Low, 3.0, "이차함수의 그래프 평행이동"),
    q(12, FUNCTIONS, MidLow, 3.5, "이차함수의 식 구하기"),
    q(13, FUNCTIONS, Mid, 4.0, "꼭짓점과 축의 방정식"),
    q(14, FUNCTIONS, Mid, 4.0, "그래프와 x축의 교점"),
    q(15, FUNCTIONS, High, 4.5, "이차함수의 최댓값과 최솟값"),
    q(16, FUNCTIONS, Extreme, 5.5, "이차함수와 직선의 위치 관계"),
    q(17, GEOMETRY, Low, 3.0, "삼각비의 뜻"),
    q(18, GEOMETRY, MidLow, 3.5, "특수각의 삼각비"),
    q(19, GEOMETRY, Mid, 4.0, "원의 현과 중심각"),
    q(20, GEOMETRY, High, 4.5, "원주각의 성질"),
    q(21, GEOMETRY, Extreme, 5.0, "접선과 현이 이루는 각"),
    q(22, PROBABILITY_AND_STATISTICS, Low, 3.0, "대푯값: 평균·중앙값·최빈값"),
    q(23, PROBABILITY_AND_STATISTICS, Mid, 4.0, "분산과 표준편차"),
    q(24, PROBABILITY_AND_STATISTICS, High, 4.5, "산점도와 상관관계"),
    q(25, PROBABILITY_AND_STATISTICS, Extreme, 5.5, "경우의 수와 확률 종합"),
];

/// TRI
pub(super) const TRI: [QuestionInfo; 25] = [
    q(1, POLYNOMIALS, Low, 3.0, "다항식의 덧셈과 뺄셈"),
    q(2, POLYNOMIALS, Low, 3.0, "다항식의 곱셈과 나눗셈"),
    q(3, POLYNOMIALS, MidLow, 3.5, "항등식과 미정계수법"),
    q(4, POLYNOMIALS, Mid, 4.0, "나머지정리와 인수정리"),
    q(5, POLYNOMIALS, High, 4.5, "조립제법을 이용한 인수분해"),
    q(6, EQUATIONS_AND_INEQUALITIES, Low, 3.0, "복소수의 사칙연산"),
    q(7, EQUATIONS_AND_INEQUALITIES, MidLow, 3.5, "이차방정식의 판별식"),
    q(8, EQUATIONS_AND_INEQUALITIES, MidLow, 3.5, "근과 계수의 관계"),
    q(9, EQUATIONS_AND_INEQUALITIES, Mid, 4.0, "이차방정식과 이차함수의 관계"),
    q(10, EQUATIONS_AND_INEQUALITIES, Mid, 4.0, "삼차방정식과 사차방정식"),
    q(11, EQUATIONS_AND_INEQUALITIES, High, 4.5, "연립이차부등식"),
    q(12, EQUATIONS_AND_INEQUALITIES, Extreme, 5.0, "이차부등식이 항상 성립할 조건"),
    q(13, EQUATIONS_OF_FIGURES, Low, 3.0, "두 점 사이의 거리와 내분점"),
    q(14, EQUATIONS_OF_FIGURES, MidLow, 3.5, "직선의 방정식"),
    q(15, EQUATIONS_OF_FIGURES, Mid, 4.0, "점과 직선 사이의 거리"),
    q(16, EQUATIONS_OF_FIGURES, Mid, 4.0, "원의 방정식"),
    q(17, EQUATIONS_OF_FIGURES, High, 4.5, "원과 직선의 위치 관계"),
    q(18, EQUATIONS_OF_FIGURES, Extreme, 5.0, "평행이동과 대칭이동 종합"),
    q(19, SETS_AND_PROPOSITIONS, Low, 3.0, "집합의 연산"),
    q(20, SETS_AND_PROPOSITIONS, MidLow, 3.5, "명제의 역·이·대우"),
    q(21, SETS_AND_PROPOSITIONS, Mid, 4.0, "필요조건과 충분조건"),
    q(22, SETS_AND_PROPOSITIONS, High, 5.0, "절대부등식의 증명"),
    q(23, FUNCTIONS, Mid, 4.0, "합성함수와 역함수"),
    q(24, FUNCTIONS, High, 5.0, "유리함수의 그래프"),
    q(25, FUNCTIONS, Extreme, 6.0, "무리함수와 역함수의 교점"),
];
