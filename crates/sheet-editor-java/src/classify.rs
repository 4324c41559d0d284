//! Token classification.
//!
//! Maps a [`JavaNodeKind`] plus its immediate structural context to a
//! [`StyleCategory`]. Disambiguation is purely structural: the parent (and
//! for dotted annotation names, grandparent) construct kind and the grammar
//! field the node occupies. No type inference, no symbol resolution.
//!
//! The classifier is a pure, total function: identical inputs always produce
//! identical outputs, nothing ever fails, and kinds with no mapping produce
//! `None` (plain-text rendering). That includes nodes synthesized by parser
//! error recovery, which simply have no kind.

use crate::kind::JavaNodeKind;
use sheet_editor_lang::StyleCategory;

/// Structural context of a node being classified.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ClassifyContext {
    /// Kind of the node's parent, if the parent has a mapped kind.
    pub parent: Option<JavaNodeKind>,
    /// Kind of the node's grandparent, if it has a mapped kind.
    pub grandparent: Option<JavaNodeKind>,
    /// Grammar field name the node occupies within its parent.
    pub field: Option<&'static str>,
}

impl ClassifyContext {
    /// Context with only a parent kind.
    pub fn in_parent(parent: JavaNodeKind) -> Self {
        Self {
            parent: Some(parent),
            ..Self::default()
        }
    }

    /// Context with a parent kind and a field name.
    pub fn in_field(parent: JavaNodeKind, field: &'static str) -> Self {
        Self {
            parent: Some(parent),
            grandparent: None,
            field: Some(field),
        }
    }
}

/// Classify a node kind in its structural context.
pub fn classify(kind: JavaNodeKind, ctx: &ClassifyContext) -> Option<StyleCategory> {
    use JavaNodeKind as K;
    use StyleCategory as S;

    let category = match kind {
        K::LineComment => S::LineComment,
        K::BlockComment => S::BlockComment,

        K::KwNew | K::KwVar | K::KwAssert => S::Keyword,
        K::KwInstanceof => S::OperatorKeyword,
        K::KwClass
        | K::KwRecord
        | K::KwInterface
        | K::KwExtends
        | K::KwImplements
        | K::KwModule
        | K::KwPackage
        | K::KwImport
        | K::KwEnum => S::DefinitionKeyword,
        K::KwSwitch
        | K::KwConst
        | K::KwGoto
        | K::KwYield
        | K::KwWhile
        | K::KwFor
        | K::KwIf
        | K::KwElse
        | K::KwCase
        | K::KwDefault
        | K::KwDo
        | K::KwBreak
        | K::KwContinue
        | K::KwReturn
        | K::KwTry
        | K::KwCatch
        | K::KwFinally
        | K::KwThrow => S::ControlKeyword,
        K::KwRequires
        | K::KwExports
        | K::KwOpens
        | K::KwUses
        | K::KwProvides
        | K::KwTransitive
        | K::KwPublic
        | K::KwPrivate
        | K::KwProtected
        | K::KwStatic
        | K::KwAbstract
        | K::KwFinal
        | K::KwStrictfp
        | K::KwSynchronized
        | K::KwNative
        | K::KwTransient
        | K::KwVolatile
        | K::KwThrows => S::Modifier,

        K::This | K::Super | K::NullLiteral | K::BooleanLiteral => S::Constant,
        K::IntegerLiteral | K::FloatLiteral => S::NumberLiteral,
        K::StringLiteral | K::TextBlockLiteral => S::StringLiteral,
        K::CharacterLiteral => S::CharLiteral,

        K::PrimitiveType | K::TypeIdentifier => S::TypeName,

        K::ArithOp => S::ArithmeticOperator,
        K::LogicOp => S::LogicOperator,
        K::BitOp => S::BitwiseOperator,
        K::CompareOp => S::CompareOperator,
        K::AssignOp => S::AssignOperator,
        K::UpdateOp => S::UpdateOperator,
        // `<` and `>` delimit generics as often as they compare.
        K::Lt | K::Gt => match ctx.parent {
            Some(K::TypeArguments | K::TypeParameters) => S::Punctuation,
            _ => S::CompareOperator,
        },
        // `*` multiplies in expressions and is punctuation everywhere else
        // (import wildcards, javadoc-ish positions).
        K::Star => match ctx.parent {
            Some(K::BinaryExpression) => S::ArithmeticOperator,
            _ => S::Punctuation,
        },
        K::Asterisk | K::Arrow => S::Punctuation,
        K::At => S::Annotation,

        K::LParen | K::RParen => S::Paren,
        K::LBracket | K::RBracket => S::SquareBracket,
        K::LBrace | K::RBrace => S::Brace,
        K::Dot => S::Dereference,
        K::Comma | K::Semicolon => S::Separator,

        K::Identifier => classify_identifier(ctx),

        _ => return None,
    };
    Some(category)
}

/// Contextual classification of a bare identifier token.
fn classify_identifier(ctx: &ClassifyContext) -> StyleCategory {
    use JavaNodeKind as K;
    use StyleCategory as S;

    match ctx.parent {
        Some(K::MethodInvocation) if ctx.field == Some("name") => S::FunctionCall,
        Some(K::MethodDeclaration | K::ConstructorDeclaration) if ctx.field == Some("name") => {
            S::FunctionDefinition
        }
        Some(K::FormalParameter | K::VariableDeclarator | K::EnumConstant)
            if ctx.field == Some("name") =>
        {
            S::VariableDefinition
        }
        Some(K::CatchFormalParameter) => S::VariableDefinition,
        Some(K::ElementValuePair) if ctx.field == Some("key") => S::AnnotationAttribute,
        Some(K::Annotation | K::MarkerAnnotation) => S::Annotation,
        // `@java.lang.SafeVarargs`: identifiers live one level down, in the
        // scoped name.
        Some(K::ScopedIdentifier)
            if matches!(ctx.grandparent, Some(K::Annotation | K::MarkerAnnotation)) =>
        {
            S::Annotation
        }
        Some(
            K::ClassDeclaration
            | K::InterfaceDeclaration
            | K::EnumDeclaration
            | K::RecordDeclaration
            | K::AnnotationTypeDeclaration
            | K::ModuleDeclaration,
        ) if ctx.field == Some("name") => S::TypeName,
        Some(K::LabeledStatement) => S::Label,
        _ => S::VariableReference,
    }
}
