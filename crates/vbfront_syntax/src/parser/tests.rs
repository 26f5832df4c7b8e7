#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::lex;
    use crate::token_helpers::render_tokens;

    fn parse_str(source: &str) -> Result<TranslationUnit, SyntaxError> {
        let tokens = lex(source).unwrap();
        parse(&tokens)
    }

    fn parse_ok(source: &str) -> TranslationUnit {
        parse_str(source).unwrap()
    }

    fn parse_err(source: &str) -> SyntaxError {
        parse_str(source).unwrap_err()
    }

    fn only_declaration(unit: &TranslationUnit) -> &Declaration {
        assert_eq!(unit.declarations.len(), 1);
        match &unit.declarations[0].node {
            ExternalDeclaration::Declaration(decl) => decl,
            other => panic!("expected a data declaration, got {other:?}"),
        }
    }

    fn only_function(unit: &TranslationUnit) -> &FunctionDefinition {
        assert_eq!(unit.declarations.len(), 1);
        match &unit.declarations[0].node {
            ExternalDeclaration::FunctionDefinition(func) => func,
            other => panic!("expected a function definition, got {other:?}"),
        }
    }

    fn builtin(id: KeywordId) -> TypeKind {
        TypeKind::Builtin(id)
    }

    // ========================================================================
    // Shape classification
    // ========================================================================

    #[test]
    fn test_function_definition() {
        let unit = parse_ok("Function Foo(x As Integer) As Integer (\n  Foo = x * 2\nEnd Function\n");
        let func = only_function(&unit);

        assert!(func.specifiers.is_empty());
        assert_eq!(func.declarator.name, "Foo");
        assert_eq!(func.declarator.procedure, Some(ProcedureKind::Function));
        assert_eq!(
            func.declarator.type_name.as_ref().map(|t| &t.kind),
            Some(&builtin(KeywordId::Integer))
        );

        let params = func.declarator.parameters();
        assert_eq!(params.len(), 1);
        assert_eq!(params[0].name, "x");
        assert_eq!(
            params[0].type_name.as_ref().map(|t| &t.kind),
            Some(&builtin(KeywordId::Integer))
        );

        assert_eq!(func.body.statements.len(), 1);
        assert_eq!(render_tokens(&func.body.statements[0].tokens), "Foo = x * 2");
    }

    #[test]
    fn test_forward_declaration_produces_no_node() {
        let tokens = lex("Declare Function Foo Lib \"x.dll\" (x As Integer)\n").unwrap();
        let mut context = ParseContext::new();
        let unit = parse_with_context(&tokens, &mut context).unwrap();

        assert!(unit.declarations.is_empty());
        let forwards = context.forward_declarations();
        assert_eq!(forwards.len(), 1);
        assert_eq!(forwards[0].name, "Foo");
        assert_eq!(forwards[0].span, Span::new(0, 47));
    }

    #[test]
    fn test_forward_declaration_with_alias_and_return_type() {
        let tokens =
            lex("Private Declare Function GetTicks Lib \"kernel32\" Alias \"GetTickCount\" () As Long\n").unwrap();
        let mut context = ParseContext::new();
        let unit = parse_with_context(&tokens, &mut context).unwrap();

        assert!(unit.declarations.is_empty());
        assert_eq!(context.forward_declarations()[0].name, "GetTicks");
    }

    #[test]
    fn test_data_declaration() {
        let unit = parse_ok("Dim x As Integer\n");
        let decl = only_declaration(&unit);

        assert_eq!(decl.specifiers.len(), 1);
        assert_eq!(decl.specifiers[0].keyword(), Some(KeywordId::Dim));
        assert_eq!(decl.initializers.len(), 1);

        let init = &decl.initializers[0];
        assert_eq!(init.declarator.name, "x");
        assert_eq!(init.declarator.procedure, None);
        assert!(init.declarator.suffix.is_none());
        assert!(init.initializer.is_none());
        assert_eq!(
            init.declarator.type_name.as_ref().map(|t| &t.kind),
            Some(&builtin(KeywordId::Integer))
        );
    }

    #[test]
    fn test_bare_parenthesized_name_is_forward_declaration() {
        // Nothing after the closing parenthesis: the shape rule cannot tell this from a prototype.
        let tokens = lex("Dim a(10)\n").unwrap();
        let mut context = ParseContext::new();
        let unit = parse_with_context(&tokens, &mut context).unwrap();

        assert!(unit.declarations.is_empty());
        assert_eq!(context.forward_declarations()[0].name, "a");
    }

    #[test]
    fn test_classification_does_not_move_cursor() {
        let tokens = lex("Public Sub Main() (\nEnd Sub\n").unwrap();
        let mut context = ParseContext::new();
        let parser = Parser::new(&tokens, &mut context);

        assert_eq!(
            parser.classify_declaration_shape().unwrap(),
            DeclarationShape::FunctionDefinition
        );
        assert_eq!(parser.pos, 0);
    }

    #[test]
    fn test_declared_names_are_skipped() {
        let source = "Widget Build()\n";

        // Unseeded: `Widget` is taken as the declared name and `Build` is a stray token.
        let err = parse_err(source);
        assert_eq!(err.construct, Construct::InitializeDeclarator);
        assert_eq!(err.index, 1);

        let tokens = lex(source).unwrap();
        let mut context = ParseContext::with_declared_names(["Widget"]);
        let unit = parse_with_context(&tokens, &mut context).unwrap();
        assert!(unit.declarations.is_empty());
        assert_eq!(
            context.forward_declarations(),
            &[ForwardDeclaration {
                name: "Build".to_string(),
                span: Span::new(0, 14),
            }]
        );
    }

    fn parse_with_names(source: &str, names: &[&str]) -> TranslationUnit {
        let tokens = lex(source).unwrap();
        let mut context = ParseContext::with_declared_names(names.iter().copied());
        parse_with_context(&tokens, &mut context).unwrap()
    }

    #[test]
    fn test_declared_name_before_data_declarator() {
        let unit = parse_with_names("Widget w\n", &["Widget"]);
        let decl = only_declaration(&unit);

        assert_eq!(
            decl.specifiers,
            vec![DeclarationSpecifier {
                kind: SpecifierKind::DeclaredName("Widget".to_string()),
                span: Span::new(0, 6),
            }]
        );
        assert_eq!(decl.initializers.len(), 1);
        assert_eq!(decl.initializers[0].declarator.name, "w");

        let unit = parse_with_names("Public Widget a, b As Long\n", &["Widget"]);
        let decl = only_declaration(&unit);
        let kinds: Vec<&SpecifierKind> = decl.specifiers.iter().map(|s| &s.kind).collect();
        assert_eq!(
            kinds,
            vec![
                &SpecifierKind::Keyword(KeywordId::Public),
                &SpecifierKind::DeclaredName("Widget".to_string())
            ]
        );
        let names: Vec<&str> = decl.initializers.iter().map(|i| i.declarator.name.as_str()).collect();
        assert_eq!(names, vec!["a", "b"]);
    }

    #[test]
    fn test_declared_name_before_function_definition() {
        let unit = parse_with_names("Widget Build(ByVal n As Long) (\n  x = 1\nEnd Function\n", &["Widget"]);
        let func = only_function(&unit);

        assert_eq!(func.specifiers[0].kind, SpecifierKind::DeclaredName("Widget".to_string()));
        assert_eq!(func.declarator.name, "Build");
        assert_eq!(func.declarator.procedure, None);
        assert_eq!(func.declarator.parameters().len(), 1);
        assert_eq!(func.body.statements.len(), 1);
    }

    #[test]
    fn test_declared_name_after_procedure_keyword() {
        let unit = parse_with_names("Public Function Widget Build() As Long (\nEnd Function\n", &["Widget"]);
        let func = only_function(&unit);

        assert_eq!(func.specifiers.len(), 1);
        assert_eq!(func.declarator.procedure, Some(ProcedureKind::Function));
        assert_eq!(func.declarator.qualifiers, vec!["Widget"]);
        assert_eq!(func.declarator.name, "Build");
        assert_eq!(
            func.declarator.type_name.as_ref().map(|t| &t.kind),
            Some(&builtin(KeywordId::Long))
        );
    }

    #[test]
    fn test_unbalanced_parentheses() {
        let err = parse_err("Function Foo(x As Integer\n");
        assert_eq!(err.construct, Construct::ExternalDeclaration);
        assert_eq!(err.index, 6);

        let tokens = lex("Sub Foo((x)").unwrap();
        let err = parse(&tokens[..tokens.len() - 1]).unwrap_err();
        assert_eq!(err.construct, Construct::ExternalDeclaration);
        assert_eq!(err.index, 6);
    }

    // ========================================================================
    // Top-level loop
    // ========================================================================

    #[test]
    fn test_empty_inputs() {
        assert!(parse(&[]).unwrap().declarations.is_empty());
        assert!(parse_ok("\n\n' nothing here\n").declarations.is_empty());
    }

    #[test]
    fn test_attribute_statements_are_skipped() {
        let unit = parse_ok("Caption = \"Form1\"\nStartUpPosition = 3\nDim x\n");
        let decl = only_declaration(&unit);
        assert_eq!(decl.initializers[0].declarator.name, "x");
    }

    #[test]
    fn test_declarations_keep_source_order() {
        let source = "\
Dim total As Long
Declare Sub Sleep Lib \"kernel32\" (ByVal ms As Long)
Private Function Twice(n As Long) As Long (
  Twice = n * 2
End Function
Public Sub Main() (
  total = Twice(21)
End Sub
";
        let tokens = lex(source).unwrap();
        let mut context = ParseContext::new();
        let unit = parse_with_context(&tokens, &mut context).unwrap();

        let names: Vec<&str> = unit
            .declarations
            .iter()
            .map(|d| match &d.node {
                ExternalDeclaration::FunctionDefinition(f) => f.declarator.name.as_str(),
                ExternalDeclaration::Declaration(d) => d.initializers[0].declarator.name.as_str(),
            })
            .collect();
        assert_eq!(names, vec!["total", "Twice", "Main"]);
        assert_eq!(context.forward_declarations()[0].name, "Sleep");
    }

    #[test]
    fn test_declaration_spans() {
        let unit = parse_ok("Dim x\nDim y\n");
        assert_eq!(unit.declarations[0].span, Span::new(0, 5));
        assert_eq!(unit.declarations[1].span, Span::new(6, 11));
    }

    #[test]
    fn test_final_statement_without_newline() {
        let tokens = lex("Dim x As Integer").unwrap();
        let unit = parse(&tokens[..tokens.len() - 1]).unwrap();
        assert_eq!(only_declaration(&unit).initializers.len(), 1);
    }

    // ========================================================================
    // Declarations
    // ========================================================================

    #[test]
    fn test_multiple_declarators_with_initializers() {
        let unit = parse_ok("Public a As Long, b, c As String = \"x\" & Name\n");
        let decl = only_declaration(&unit);

        assert_eq!(decl.specifiers[0].keyword(), Some(KeywordId::Public));
        let names: Vec<&str> = decl.initializers.iter().map(|i| i.declarator.name.as_str()).collect();
        assert_eq!(names, vec!["a", "b", "c"]);

        let init = decl.initializers[2].initializer.as_ref().unwrap();
        assert_eq!(render_tokens(&init.tokens), "\"x\" & Name");
    }

    #[test]
    fn test_stacked_specifiers() {
        let unit = parse_ok("Private Const Limit As Integer = 10\n");
        let decl = only_declaration(&unit);
        let keywords: Vec<KeywordId> = decl.specifiers.iter().filter_map(DeclarationSpecifier::keyword).collect();
        assert_eq!(keywords, vec![KeywordId::Private, KeywordId::Const]);
    }

    #[test]
    fn test_array_bounds() {
        let unit = parse_ok("Dim grid(1 To 10, 5) As Double, buf() As Byte\n");
        let decl = only_declaration(&unit);

        assert_eq!(
            decl.initializers[0].declarator.suffix,
            Some(DeclaratorSuffix::Bounds(vec![
                ArrayBound {
                    lower: Some(1),
                    upper: 10
                },
                ArrayBound {
                    lower: None,
                    upper: 5
                },
            ]))
        );
        assert_eq!(
            decl.initializers[1].declarator.suffix,
            Some(DeclaratorSuffix::Bounds(Vec::new()))
        );
    }

    #[test]
    fn test_new_and_qualified_type() {
        let unit = parse_ok("Dim dict As New Scripting.Dictionary\n");
        let type_name = only_declaration(&unit).initializers[0]
            .declarator
            .type_name
            .clone()
            .unwrap();

        assert!(type_name.is_new);
        assert_eq!(
            type_name.kind,
            TypeKind::Named(vec!["Scripting".to_string(), "Dictionary".to_string()])
        );
        assert_eq!(type_name.to_string(), "New Scripting.Dictionary");
    }

    #[test]
    fn test_missing_type_after_as() {
        let err = parse_err("Dim x As\n");
        assert_eq!(err.construct, Construct::Declarator);
        assert_eq!(err.index, 3);
        assert_eq!(err.message, "expected a type name after 'As', found end of statement");
    }

    #[test]
    fn test_array_bound_must_be_integer_literal() {
        let err = parse_err("Dim buf(MAX_LEN) As Byte\n");
        assert_eq!(err.construct, Construct::Declarator);
        assert_eq!(err.index, 3);
        assert!(err.message.starts_with("expected an integer array bound"), "{}", err.message);
    }

    #[test]
    fn test_empty_initializer() {
        let err = parse_err("Dim x =\n");
        assert_eq!(err.construct, Construct::InitializeDeclarator);
        assert_eq!(err.index, 3);
    }

    #[test]
    fn test_missing_separator_between_declarators() {
        let err = parse_err("Dim x y\n");
        assert_eq!(err.construct, Construct::InitializeDeclarator);
        assert_eq!(err.index, 2);
    }

    #[test]
    fn test_specifiers_without_declarator() {
        let err = parse_err("Public\n");
        assert_eq!(err.construct, Construct::InitializeDeclarator);
        assert_eq!(err.index, 1);
    }

    #[test]
    fn test_unknown_leading_keyword() {
        let err = parse_err("Option Explicit\n");
        assert_eq!(err.construct, Construct::DeclarationSpecifier);
        assert_eq!(err.index, 0);
    }

    // ========================================================================
    // Procedures
    // ========================================================================

    #[test]
    fn test_sub_with_specifier_and_empty_body() {
        let unit = parse_ok("Private Sub Form_Load() (\nEnd Sub\n");
        let func = only_function(&unit);

        assert_eq!(func.specifiers[0].keyword(), Some(KeywordId::Private));
        assert_eq!(func.declarator.procedure, Some(ProcedureKind::Sub));
        assert_eq!(func.declarator.suffix, Some(DeclaratorSuffix::Parameters(Vec::new())));
        assert!(func.body.statements.is_empty());
    }

    #[test]
    fn test_property_get() {
        let unit = parse_ok("Public Property Get Title() As String (\n  Title = m_title\nEnd Property\n");
        let func = only_function(&unit);

        assert_eq!(
            func.declarator.procedure,
            Some(ProcedureKind::Property(Some(PropertyAccessor::Get)))
        );
        assert_eq!(func.declarator.name, "Title");
        assert_eq!(func.body.statements.len(), 1);
    }

    #[test]
    fn test_parameter_forms() {
        let unit = parse_ok(
            "Sub Log(ByVal msg As String, Optional ByRef level As Long = 1, ParamArray rest() As Variant) (\nEnd Sub\n",
        );
        let params = only_function(&unit).declarator.parameters();
        assert_eq!(params.len(), 3);

        assert_eq!(params[0].modifiers, vec![KeywordId::ByVal]);
        assert_eq!(params[0].name, "msg");

        assert_eq!(params[1].modifiers, vec![KeywordId::Optional, KeywordId::ByRef]);
        let default = params[1].default.as_ref().unwrap();
        assert_eq!(default.tokens.len(), 1);
        assert_eq!(default.tokens[0].kind, TokenKind::Int(1));

        assert_eq!(params[2].modifiers, vec![KeywordId::ParamArray]);
        assert!(params[2].is_array);
        assert_eq!(
            params[2].type_name.as_ref().map(|t| &t.kind),
            Some(&builtin(KeywordId::Variant))
        );
    }

    #[test]
    fn test_parenthesized_parameter_default() {
        let unit = parse_ok("Sub S(Optional x As Long = (1 + 2)) (\nEnd Sub\n");
        let params = only_function(&unit).declarator.parameters();
        let default = params[0].default.as_ref().unwrap();
        assert_eq!(render_tokens(&default.tokens), "(1 + 2)");
    }

    #[test]
    fn test_body_keeps_nested_end_statements() {
        let unit = parse_ok("Sub Check() (\n  If x Then\n    End\n  End If\nEnd Sub\n");
        let func = only_function(&unit);
        let lines: Vec<String> = func.body.statements.iter().map(|s| render_tokens(&s.tokens)).collect();
        assert_eq!(lines, vec!["If x Then", "End", "End If"]);
    }

    #[test]
    fn test_missing_body_terminator() {
        let err = parse_err("Sub Main() (\n  Beep\n");
        assert_eq!(err.construct, Construct::CompoundStatement);
        assert_eq!(err.index, 8);
        assert_eq!(err.message, "expected 'End Sub', found end of input");
    }

    #[test]
    fn test_mismatched_body_terminator() {
        let err = parse_err("Function F() (\nEnd Sub\n");
        assert_eq!(err.construct, Construct::CompoundStatement);
    }

    #[test]
    fn test_trailing_tokens_after_end() {
        let err = parse_err("Sub Main() (\nEnd Sub Main\n");
        assert_eq!(err.construct, Construct::CompoundStatement);
        assert_eq!(err.index, 8);
    }

    #[test]
    fn test_parse_source_wraps_both_stages() {
        let mut context = ParseContext::new();
        assert!(matches!(
            parse_source("Dim x$", &mut context),
            Err(FrontendError::Lexical(_))
        ));
        assert!(matches!(
            parse_source("Dim x As\n", &mut context),
            Err(FrontendError::Syntax(_))
        ));
        assert_eq!(parse_source("Dim x\n", &mut context).unwrap().declarations.len(), 1);
    }
}
